//! Navigation collaborator port.

/// Performs client-side page transitions.
///
/// Fire-and-forget: the session core never observes the outcome of a
/// navigation, it only requests one. The session-expiry path depends on
/// this capability to return the user to the landing page.
pub trait Navigator: Send + Sync {
    /// Transitions the client to the given path.
    fn navigate(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigator_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn Navigator) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn Navigator>>();
    }
}
