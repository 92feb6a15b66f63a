use super::state::*;
use bevy::prelude::*;
use constants::item::ItemKind;

const IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
const HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
const PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
const ACTIVE: Color = Color::srgb(0.85, 0.35, 0.75);

// Spawns the control panel with one button per item
pub fn spawn_control_panel(mut commands: Commands) {
    commands
        .spawn((
            ControlPanelRoot,
            Name::new("ControlPanel"),
            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.85)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(6.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                ..default()
            },
        ))
        .with_children(|panel| {
            for kind in ItemKind::ALL {
                panel
                    .spawn((
                        Control::new(Some(kind)),
                        Button,
                        Name::new(format!("{}Button", kind.label())),
                        BackgroundColor(IDLE),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Px(140.0),
                            height: Val::Px(32.0),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            ControlLabel,
                            Text::new(kind.label()),
                            TextFont { font_size: 16.0, ..default() },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                    });
            }
        });
}

// Turns button presses into control clicks
pub fn emit_button_clicks(
    q: Query<(Entity, &Interaction), (Changed<Interaction>, With<Button>, With<Control>)>,
    mut clicks: EventWriter<ControlClicked>,
) {
    for (entity, interaction) in &q {
        if *interaction == Interaction::Pressed {
            clicks.write(ControlClicked { control: entity });
        }
    }
}

// Active buttons stay highlighted
pub fn reflect_control_state(
    mut q: Query<
        (&Control, &Interaction, &mut BackgroundColor),
        (Or<(Changed<Control>, Changed<Interaction>)>, With<Button>),
    >,
) {
    for (control, interaction, mut bg) in &mut q {
        *bg = BackgroundColor(match *interaction {
            Interaction::Pressed => PRESSED,
            Interaction::Hovered if !control.active => HOVERED,
            _ if control.active => ACTIVE,
            _ => IDLE,
        });
    }
}
