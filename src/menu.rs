use crate::Grid;
use crate::display::{screen_size, Rect};

pub const RESUME_LABEL: &str = "Resume";
pub const EXIT_LABEL: &str = "Exit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Resume,
    Exit,
}

/// Last known mouse state, in screen units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pointer {
    pub position: Option<(i32, i32)>,
    pub pressed: bool,
    /// Where the button last went down over the open menu. Cleared once a
    /// frame, so a press and release inside one frame still registers.
    pub clicked_at: Option<(i32, i32)>,
}

/// Where the overlay and its hit-regions sit on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub panel: Rect,
    pub resume: Rect,
    pub exit: Rect,
}

impl MenuLayout {
    pub fn for_grid(grid: Grid) -> Self {
        let (sw, sh) = screen_size(grid);
        let label_x = sw * 9 / 20;
        let (w, h) = (sw / 4, (sh / 8).max(1));

        MenuLayout {
            panel: Rect::new(sw / 8, sh / 4, sw * 3 / 4, sh / 2),
            resume: Rect::new(label_x, sh * 3 / 10, w, h),
            exit: Rect::new(label_x, sh * 17 / 40, w, h),
        }
    }

    pub fn hovered(&self, pointer: &Pointer) -> Option<MenuChoice> {
        self.choice_at(pointer.position?)
    }

    pub fn choice_at(&self, pos: (i32, i32)) -> Option<MenuChoice> {
        if self.resume.contains(pos) {
            Some(MenuChoice::Resume)
        } else if self.exit.contains(pos) {
            Some(MenuChoice::Exit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> Pointer {
        Pointer { position: Some((x, y)), ..Pointer::default() }
    }

    #[test]
    fn default_layout_matches_the_window_proportions() {
        let layout = MenuLayout::for_grid(Grid::default());
        assert_eq!(layout.panel, Rect::new(5, 5, 30, 10));
        assert_eq!(layout.resume, Rect::new(18, 6, 10, 2));
        assert_eq!(layout.exit, Rect::new(18, 8, 10, 2));
    }

    #[test]
    fn regions_never_overlap() {
        for height in 8..=60 {
            let layout = MenuLayout::for_grid(Grid::new(20, height));
            assert!(
                layout.exit.y >= layout.resume.y + layout.resume.h,
                "overlap at height {}",
                height
            );
        }
    }

    #[test]
    fn hover_follows_the_pointer() {
        let layout = MenuLayout::for_grid(Grid::default());

        assert_eq!(layout.hovered(&at(19, 6)), Some(MenuChoice::Resume));
        assert_eq!(layout.hovered(&at(19, 8)), Some(MenuChoice::Exit));
        assert_eq!(layout.hovered(&at(19, 10)), None);
        assert_eq!(layout.hovered(&Pointer::default()), None);
    }

    #[test]
    fn choices_by_position() {
        let layout = MenuLayout::for_grid(Grid::default());

        assert_eq!(layout.choice_at((18, 7)), Some(MenuChoice::Resume));
        assert_eq!(layout.choice_at((27, 9)), Some(MenuChoice::Exit));
        assert_eq!(layout.choice_at((28, 9)), None);
        assert_eq!(layout.choice_at((17, 6)), None);
    }
}
