use super::view::View;

/// How a view change was triggered. Only forward steps are recorded in
/// history; back and home are replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Forward,
    Replay,
}

/// Tracks the view shown in the detail panel and the views visited before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Option<View>,
    history: Vec<View>,
}

impl Navigator {
    /// A navigator sitting on the welcome view with no history.
    pub fn new() -> Self {
        Self {
            current: Some(View::Welcome),
            history: Vec::new(),
        }
    }

    /// A navigator before anything has been rendered. The first `goto`
    /// does not push.
    pub fn unstarted() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<View> {
        self.current
    }

    /// Views visited before the current one, oldest first.
    pub fn history(&self) -> &[View] {
        &self.history
    }

    /// Forward navigation to `view`.
    pub fn goto(&mut self, view: View) {
        self.transition(view, Transition::Forward);
    }

    /// Return to the previous view. Returns the view now shown, or `None`
    /// when there was nothing to go back to.
    pub fn go_back(&mut self) -> Option<View> {
        let previous = self.history.pop()?;
        self.transition(previous, Transition::Replay);
        Some(previous)
    }

    /// Reset to the welcome view and forget history. Returns `false` when
    /// already home.
    pub fn go_home(&mut self) -> bool {
        if self.is_home() {
            return false;
        }
        self.history.clear();
        self.transition(View::Welcome, Transition::Replay);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn is_home(&self) -> bool {
        self.current == Some(View::Welcome)
    }

    fn transition(&mut self, view: View, how: Transition) {
        if how == Transition::Forward {
            if let Some(current) = self.current {
                self.history.push(current);
            }
        }
        tracing::debug!(
            from = ?self.current,
            to = %view,
            replay = how == Transition::Replay,
            depth = self.history.len(),
            "navigate"
        );
        self.current = Some(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Some(View::Welcome));
        assert!(nav.history().is_empty());
        assert!(nav.is_home());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_first_goto_on_unstarted_does_not_push() {
        let mut nav = Navigator::unstarted();
        assert_eq!(nav.current(), None);
        assert!(!nav.is_home());

        nav.goto(View::Welcome);
        assert_eq!(nav.current(), Some(View::Welcome));
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_goto_pushes_previous() {
        let mut nav = Navigator::new();
        nav.goto(View::About);
        nav.goto(View::Projects);
        assert_eq!(nav.current(), Some(View::Projects));
        assert_eq!(nav.history(), &[View::Welcome, View::About]);
    }

    #[test]
    fn test_goto_same_view_still_pushes() {
        let mut nav = Navigator::new();
        nav.goto(View::Skills);
        nav.goto(View::Skills);
        assert_eq!(nav.history(), &[View::Welcome, View::Skills]);
    }

    #[test]
    fn test_go_back_does_not_record_itself() {
        let mut nav = Navigator::new();
        nav.goto(View::About);
        nav.goto(View::Contact);

        assert_eq!(nav.go_back(), Some(View::About));
        assert_eq!(nav.history(), &[View::Welcome]);
        assert_eq!(nav.go_back(), Some(View::Welcome));
        assert!(nav.history().is_empty());
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.current(), Some(View::Welcome));
    }

    #[test]
    fn test_go_home_from_home_is_noop() {
        let mut nav = Navigator::new();
        assert!(!nav.go_home());
        assert_eq!(nav, Navigator::new());
    }

    #[test]
    fn test_back_can_land_on_home_with_history() {
        // help/clear navigate forward to welcome, so welcome may sit on top
        // of a non-empty history.
        let mut nav = Navigator::new();
        nav.goto(View::About);
        nav.goto(View::Welcome);
        assert!(nav.is_home());
        assert!(nav.can_go_back());
        assert!(!nav.go_home());
        assert_eq!(nav.history(), &[View::Welcome, View::About]);
    }
}
