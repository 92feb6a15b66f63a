pub const ROOM_MANIFEST_PATH: &str = "room_manifest.json";

pub const ROOM_MODEL_PATH: &str = "gltf/room.glb";

pub const ENVIRONMENT_DIFFUSE_PATH: &str = "environment/room_diffuse_rgb9e5_zstd.ktx2";
pub const ENVIRONMENT_SPECULAR_PATH: &str = "environment/room_specular_rgb9e5_zstd.ktx2";

pub const ACTIVATE_SOUND_PATHS: &[&str] = &[
    "sound/sound1.wav",
    "sound/sound2.wav",
    "sound/sound3.wav",
];
pub const DEACTIVATE_SOUND_PATH: &str = "sound/soundOff.wav";
