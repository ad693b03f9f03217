use web_sys::Window;

/// Returns the browser window when running inside one.
///
/// Off the wasm target (host tests, pre-render passes) there is no DOM, and
/// calling into `web_sys` would abort, so this always answers `None` there.
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn has_window() -> bool {
    window().is_some()
}

#[cfg(test)]
mod tests {
    #[test]
    fn host_target_has_no_window() {
        assert!(!super::has_window());
    }
}
