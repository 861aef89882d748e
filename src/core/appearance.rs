//! # Appearance Module / 外观模块
//!
//! Application-level appearance derived from the layout direction. Rather than
//! a hidden process-wide default applied to every widget, view-construction
//! code receives an `Appearance` value, read once at startup and again on
//! every language change through an `AppearanceCell` subscribed to the
//! preference.
//!
//! 从布局方向派生的应用级外观。视图构建代码接收一个 `Appearance` 值，
//! 而不是应用于每个控件的隐藏全局默认值。

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::catalog::LayoutDirection;
use crate::core::preference::{DirectionObserver, LocalePreference};

/// Whether views are forced into a particular direction regardless of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticContent {
    ForceLeftToRight,
    ForceRightToLeft,
}

/// Natural alignment of text on the leading edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Right,
}

/// Appearance settings passed down the view-construction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub direction: LayoutDirection,
    pub semantic_content: SemanticContent,
    pub text_alignment: TextAlignment,
}

impl Appearance {
    pub fn for_direction(direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::LeftToRight => Self {
                direction,
                semantic_content: SemanticContent::ForceLeftToRight,
                text_alignment: TextAlignment::Left,
            },
            LayoutDirection::RightToLeft => Self {
                direction,
                semantic_content: SemanticContent::ForceRightToLeft,
                text_alignment: TextAlignment::Right,
            },
        }
    }

    pub fn from_preference(preference: &LocalePreference) -> Self {
        Self::for_direction(preference.direction())
    }

    pub fn is_mirrored(&self) -> bool {
        self.direction.is_right_to_left()
    }

    /// Pads `text` so that it sits on the leading edge of a `width`-column line.
    /// Text at least `width` characters long is returned unchanged.
    ///
    /// 填充 `text`，使其位于 `width` 列宽行的起始边缘。
    pub fn align(&self, text: &str, width: usize) -> String {
        let padding = " ".repeat(width.saturating_sub(text.chars().count()));
        match self.text_alignment {
            TextAlignment::Left => format!("{}{}", text, padding),
            TextAlignment::Right => format!("{}{}", padding, text),
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::for_direction(LayoutDirection::default())
    }
}

/// A shared, observable `Appearance`.
///
/// Clone it into the preference with `subscribe` and keep a handle for the
/// views; every applied language change replaces the held value.
#[derive(Debug, Clone, Default)]
pub struct AppearanceCell(Rc<RefCell<Appearance>>);

impl AppearanceCell {
    pub fn new(appearance: Appearance) -> Self {
        Self(Rc::new(RefCell::new(appearance)))
    }

    pub fn get(&self) -> Appearance {
        *self.0.borrow()
    }
}

impl DirectionObserver for AppearanceCell {
    fn direction_changed(&self, direction: LayoutDirection) {
        *self.0.borrow_mut() = Appearance::for_direction(direction);
    }
}
