use super::state::{Control, ControlClicked};
use bevy::prelude::*;
use constants::item::{ACTIVE_CLASS, CONTROL_MARKER_CLASS};
use std::sync::{Arc, Mutex};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, window};

/// Position of a control's element in `DomControlElements`.
#[derive(Component, Debug, Clone, Copy)]
pub struct DomControl {
    pub index: usize,
}

/// Indices of clicked elements, filled by JS listeners between frames.
#[derive(Resource)]
pub struct DomClickQueue(Arc<Mutex<Vec<usize>>>);

/// Elements behind the DOM controls. JS handles stay on the main thread.
pub struct DomControlElements(Vec<Element>);

/// Scan the page for control buttons and attach one click listener each.
pub fn bind_dom_controls(world: &mut World) {
    let Some(document) = window().and_then(|w| w.document()) else {
        warn!("No document available, DOM controls disabled");
        return;
    };

    let selector = format!(".{}", CONTROL_MARKER_CLASS);
    let nodes = match document.query_selector_all(&selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            error!("Failed to query control buttons: {:?}", e);
            return;
        }
    };

    let queue: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let mut elements = Vec::new();

    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let index = elements.len();
        let classes = element.class_name();
        let control = Control::from_classes(classes.split_whitespace());
        if control.item.is_none() {
            warn!("Control button with classes '{}' has no item marker", classes);
        }

        let queue_clone = queue.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            if let Ok(mut queue) = queue_clone.lock() {
                queue.push(index);
            }
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) =
            element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            error!("Failed to attach click listener: {:?}", e);
            continue;
        }
        // Listener lives as long as the page.
        closure.forget();

        world.spawn((control, DomControl { index }, Name::new(format!("DomControl{index}"))));
        elements.push(element);
    }

    info!("Bound {} DOM controls", elements.len());
    world.insert_resource(DomClickQueue(queue));
    world.insert_non_send_resource(DomControlElements(elements));
}

pub fn drain_dom_clicks(
    queue: Option<Res<DomClickQueue>>,
    controls: Query<(Entity, &DomControl)>,
    mut clicks: EventWriter<ControlClicked>,
) {
    let Some(queue) = queue else {
        return;
    };

    let pending = if let Ok(mut queue) = queue.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for index in pending {
        if let Some((entity, _)) = controls.iter().find(|(_, dom)| dom.index == index) {
            clicks.write(ControlClicked { control: entity });
        }
    }
}

/// Mirror the active flag onto the button's class list.
pub fn sync_dom_active_class(
    elements: Option<NonSend<DomControlElements>>,
    controls: Query<(&Control, &DomControl), Changed<Control>>,
) {
    let Some(elements) = elements else {
        return;
    };

    for (control, dom) in &controls {
        let Some(element) = elements.0.get(dom.index) else {
            continue;
        };
        let classes = element.class_list();
        let result = if control.active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(e) = result {
            warn!("Failed to update button class: {:?}", e);
        }
    }
}
