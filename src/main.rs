use log::info;
use prettylog::{pretty_log_with, ENABLED_SENTINEL};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Point {
    x: i32,
    y: i32,
}

// Same as `pretty_log!`, but always enabled for the demo
macro_rules! demo_log {
    ($color:expr $(, $value:expr)* $(,)?) => {
        pretty_log_with!(Some(ENABLED_SENTINEL), $color $(, $value)*)
    };
}

fn main() {
    env_logger::init();
    info!("Starting prettylog demo");

    let obj = json!({
        "a": 1,
        "b": 2,
        "c": "tres",
        "d": "cuatro",
        "e": "five",
        "f": "six",
    });

    demo_log!("red", "Hola.", "Log 1.", "Red color.");
    demo_log!("green", "Hola.", "Log 2.", "Green color.");
    demo_log!("blue", "Hola.", "Log 3.", "Blue color.");
    demo_log!("sky", "Hola.", "Log 4.", "Unknown color, printed in white.");

    demo_log!("cyan", "Object:", obj);
    demo_log!("magenta", "Array:", [1, 2, 3, 4]);
    demo_log!("yellow", "Struct:", Point { x: 3, y: -7 });

    // Suppressed: the flag is not the sentinel
    let printed = pretty_log_with!(Some("production"), "red", "never printed");
    info!("Production flag printed a line: {}", printed.is_some());
}
