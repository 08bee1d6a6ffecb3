//! JavaScript fragment generation.
//!
//! Pure functions from loaded descriptors to the three fragment sets the
//! page template expects: sprite preload calls, object definitions, and
//! scene spawn calls. Fragment order follows the input order, which the
//! loader has already sorted by filename.

use crate::project::{GameObject, Sprite};

/// Lifecycle hooks the engine runtime calls on every object. Each gets a
/// handler in the generated definition even when no event file supplied a
/// body, so the runtime never has to probe for missing methods.
pub const LIFECYCLE_EVENTS: [&str; 3] = ["create", "step", "draw"];

/// Default spawn position for generated instances.
pub const SPAWN_X: i32 = 32;
pub const SPAWN_Y: i32 = 32;

/// One `loadSprite` call per sprite, referencing the published asset path.
pub fn preload_statements(sprites: &[Sprite]) -> Vec<String> {
    sprites
        .iter()
        .map(|s| format!(r#"game.loadSprite("{}", "assets/{}");"#, s.name, s.image))
        .collect()
}

/// One prototype-style definition per object.
///
/// Event source is spliced verbatim as the handler body. The `with (this)`
/// wrapper lets handler scripts address instance fields (`x`, `y`, ...)
/// without qualification; that rules out ES class syntax, whose bodies are
/// implicitly strict, so definitions stay prototype-based.
pub fn object_definitions(objects: &[GameObject]) -> Vec<String> {
    objects.iter().map(object_definition).collect()
}

fn object_definition(object: &GameObject) -> String {
    let name = &object.name;
    let mut out = format!(
        "function {name}(sprite) {{\n  DogeObject.call(this, sprite);\n}}\n\
         {name}.prototype = Object.create(DogeObject.prototype);\n"
    );
    for event in LIFECYCLE_EVENTS {
        let body = object.events.get(event).map(String::as_str).unwrap_or("");
        push_handler(&mut out, name, event, body);
    }
    // Extra event files become plain methods, in sorted map order.
    for (event, body) in &object.events {
        if !LIFECYCLE_EVENTS.contains(&event.as_str()) {
            push_handler(&mut out, name, event, body);
        }
    }
    out.trim_end_matches('\n').to_string()
}

fn push_handler(out: &mut String, name: &str, event: &str, body: &str) {
    out.push_str(&format!(
        "{name}.prototype.{event} = function () {{ with (this) {{\n"
    ));
    if !body.is_empty() {
        out.push_str(body.trim_end_matches('\n'));
        out.push('\n');
    }
    out.push_str("} };\n");
}

/// One spawn call per object at the default position.
pub fn create_statements(objects: &[GameObject]) -> Vec<String> {
    objects
        .iter()
        .map(|o| {
            format!(
                r#"game.spawn({}, "{}", {SPAWN_X}, {SPAWN_Y});"#,
                o.name, o.sprite
            )
        })
        .collect()
}
