use std::any::Any;
use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that forwards to the browser console and adds context
/// for Leptos owner disposal panics.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if is_owner_disposal(&message) {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. The review form was unmounted while an input or submit event was still queued");
            log!("[PANIC] 2. The reviews list read the form's memo after the form was cleaned up");
        }
    }));
}

/// Extracts the human readable message carried by a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed")
}

/// Call in main.rs or app initialization
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
