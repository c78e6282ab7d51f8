use crate::models::{Asset, AssetId};
use std::fmt;

/// The three mutually exclusive screens. The viewer carries its selection,
/// so a viewer without a selected asset cannot be represented.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Camera,
    Viewer(Asset),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Gallery => "gallery",
            Screen::Camera => "camera",
            Screen::Viewer(_) => "viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    IllegalTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::IllegalTransition { from, to } => {
                write!(f, "Cannot navigate from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Screen state machine
///
/// Legal transitions:
/// - Gallery -> Camera (after the caller checked camera permission)
/// - Camera -> Gallery (cancel or finished capture)
/// - Gallery -> Viewer (thumbnail selected)
/// - Viewer -> Gallery (back or deleted)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenNavigator {
    screen: Screen,
}

impl ScreenNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Screen {
        &self.screen
    }

    /// The asset shown in the viewer, if the viewer is active
    pub fn selection(&self) -> Option<&Asset> {
        match &self.screen {
            Screen::Viewer(asset) => Some(asset),
            _ => None,
        }
    }

    pub fn is_viewing(&self, id: &AssetId) -> bool {
        self.selection().is_some_and(|asset| &asset.id == id)
    }

    pub fn open_camera(&mut self) -> Result<(), NavigationError> {
        self.transition(|screen| matches!(screen, Screen::Gallery), Screen::Camera)
    }

    pub fn close_camera(&mut self) -> Result<(), NavigationError> {
        self.transition(|screen| matches!(screen, Screen::Camera), Screen::Gallery)
    }

    /// Selects `asset` and shows it in one step
    pub fn view(&mut self, asset: Asset) -> Result<(), NavigationError> {
        self.transition(|screen| matches!(screen, Screen::Gallery), Screen::Viewer(asset))
    }

    /// Leaves the viewer and drops the selection
    pub fn close_viewer(&mut self) -> Result<(), NavigationError> {
        self.transition(|screen| matches!(screen, Screen::Viewer(_)), Screen::Gallery)
    }

    fn transition(
        &mut self,
        allowed_from: impl Fn(&Screen) -> bool,
        to: Screen,
    ) -> Result<(), NavigationError> {
        if !allowed_from(&self.screen) {
            let err = NavigationError::IllegalTransition {
                from: self.screen.name(),
                to: to.name(),
            };
            log::warn!("{}", err);
            return Err(err);
        }
        log::debug!("Navigating {} -> {}", self.screen.name(), to.name());
        self.screen = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::asset;

    #[test]
    fn test_starts_on_gallery_without_selection() {
        let nav = ScreenNavigator::new();
        assert_eq!(nav.current(), &Screen::Gallery);
        assert!(nav.selection().is_none());
    }

    #[test]
    fn test_view_sets_selection_with_screen() {
        let mut nav = ScreenNavigator::new();
        nav.view(asset("3")).unwrap();
        assert_eq!(nav.current(), &Screen::Viewer(asset("3")));
        assert_eq!(nav.selection().map(|a| a.id.as_str()), Some("3"));
        assert!(nav.is_viewing(&AssetId::from("3")));

        nav.close_viewer().unwrap();
        assert_eq!(nav.current(), &Screen::Gallery);
        assert!(nav.selection().is_none());
    }

    #[test]
    fn test_camera_round_trip() {
        let mut nav = ScreenNavigator::new();
        nav.open_camera().unwrap();
        assert_eq!(nav.current(), &Screen::Camera);
        nav.close_camera().unwrap();
        assert_eq!(nav.current(), &Screen::Gallery);
    }

    #[test]
    fn test_camera_and_viewer_are_not_connected() {
        let mut nav = ScreenNavigator::new();
        nav.open_camera().unwrap();
        assert!(nav.view(asset("1")).is_err());
        assert!(nav.close_viewer().is_err());
        assert_eq!(nav.current(), &Screen::Camera);

        nav.close_camera().unwrap();
        nav.view(asset("1")).unwrap();
        assert_eq!(
            nav.open_camera(),
            Err(NavigationError::IllegalTransition {
                from: "viewer",
                to: "camera"
            })
        );
        assert!(nav.selection().is_some());
    }

    #[test]
    fn test_cannot_switch_selection_inside_viewer() {
        let mut nav = ScreenNavigator::new();
        nav.view(asset("1")).unwrap();
        assert!(nav.view(asset("2")).is_err());
        assert!(nav.is_viewing(&AssetId::from("1")));
    }
}
