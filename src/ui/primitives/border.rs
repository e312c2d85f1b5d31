use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use BorderChar::*;

        if supports_unicode {
            match self {
                TopLeft => theme::borders::TOP_LEFT,
                TopRight => theme::borders::TOP_RIGHT,
                BottomLeft => theme::borders::BOTTOM_LEFT,
                BottomRight => theme::borders::BOTTOM_RIGHT,
                Horizontal => theme::borders::HORIZONTAL,
                Vertical => theme::borders::VERTICAL,
            }
        } else {
            match self {
                TopLeft => theme::borders_ascii::TOP_LEFT,
                TopRight => theme::borders_ascii::TOP_RIGHT,
                BottomLeft => theme::borders_ascii::BOTTOM_LEFT,
                BottomRight => theme::borders_ascii::BOTTOM_RIGHT,
                Horizontal => theme::borders_ascii::HORIZONTAL,
                Vertical => theme::borders_ascii::VERTICAL,
            }
        }
    }
}
