//! Layout constants for consistent UI appearance

// ============================================================================
// Padding
// ============================================================================

/// Text input field padding
pub const INPUT_PADDING: f32 = 8.0;

/// Button padding
pub const BUTTON_PADDING: f32 = 10.0;

/// Padding around panel content
pub const CONTENT_PADDING: f32 = 20.0;

/// Padding inside a list row
pub const ROW_PADDING: f32 = 8.0;

/// Padding inside a badge
pub const BADGE_PADDING: iced::Padding = iced::Padding {
    top: 2.0,
    right: 6.0,
    bottom: 2.0,
    left: 6.0,
};

// ============================================================================
// Spacing
// ============================================================================

/// Spacing between stacked form elements
pub const ELEMENT_SPACING: f32 = 10.0;

/// Small vertical spacer
pub const SPACER_SIZE_SMALL: f32 = 5.0;

/// Medium vertical spacer
pub const SPACER_SIZE_MEDIUM: f32 = 10.0;

// ============================================================================
// Sizes
// ============================================================================

/// Body text size
pub const TEXT_SIZE: f32 = 14.0;

/// Secondary text size (badges, notes)
pub const SMALL_TEXT_SIZE: f32 = 12.0;

/// Panel and dialog title size
pub const TITLE_SIZE: f32 = 20.0;

/// Height of the title row
pub const TITLE_ROW_HEIGHT: f32 = 40.0;

/// Maximum width of the users panel content
pub const CONTENT_MAX_WIDTH: f32 = 640.0;

/// Maximum width of a modal dialog
pub const DIALOG_MAX_WIDTH: f32 = 400.0;

/// Corner radius of dialog cards and badges
pub const STANDARD_BORDER_RADIUS: f32 = 4.0;
