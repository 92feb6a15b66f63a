/// Duration of the drop-in animation played when an item is shown (seconds)
pub const DROP_IN_DURATION: f32 = 0.8;

/// Height above the resting position a dropped node starts from (model units)
pub const DROP_IN_OFFSET: f32 = 5.0;

/// Start height of the second wallpaper panel, which lands after the first
pub const WALLPAPER_SECOND_OFFSET: f32 = 8.0;

/// Delay before the second wallpaper panel starts falling (seconds)
pub const WALLPAPER_SECOND_DELAY: f32 = 0.5;
