use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ReplyMarkup};

use db::models::FeedbackKind;

use crate::payload::{Callback, PayloadData};

pub const FEEDBACK_LABEL: &str = "Обратная связь";
pub const HELP_LABEL: &str = "Помощь";
pub const RESOURCES_LABEL: &str = "Цифровые ресурсы";

const LIKE_BUTTON: &str = "👍 Понравилось";
const IMPROVE_BUTTON: &str = "💡 Добавить";

#[derive(Debug, Default)]
pub(crate) struct KeyboardBuilder {
    keys: Vec<InlineKeyboardButton>,
    columns: usize,
}

impl KeyboardBuilder {
    fn with_layout(rows_capacity: usize, columns: usize) -> Self {
        Self {
            keys: Vec::with_capacity(rows_capacity * columns),
            columns,
        }
    }
    fn callback<T, D>(mut self, text: T, data: D) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        self.keys.push(InlineKeyboardButton::callback(text, data));
        self
    }
}

impl From<KeyboardBuilder> for ReplyMarkup {
    fn from(value: KeyboardBuilder) -> Self {
        Self::InlineKeyboard(value.into())
    }
}

impl From<KeyboardBuilder> for InlineKeyboardMarkup {
    fn from(value: KeyboardBuilder) -> Self {
        Self::new(value.keys.chunks(value.columns).map(|row| row.to_owned()))
    }
}

pub(crate) struct Keyboards;

impl Keyboards {
    /// Menu under input field, shown until replaced
    pub(crate) fn main() -> KeyboardMarkup {
        KeyboardMarkup::new([
            vec![KeyboardButton::new(FEEDBACK_LABEL)],
            vec![KeyboardButton::new(HELP_LABEL), KeyboardButton::new(RESOURCES_LABEL)],
        ])
        .resize_keyboard()
        .persistent()
    }
    pub(crate) fn feedback() -> KeyboardBuilder {
        KeyboardBuilder::with_layout(1, 2)
            .callback(
                LIKE_BUTTON,
                Callback::choose_kind(FeedbackKind::Like).to_payload(),
            )
            .callback(
                IMPROVE_BUTTON,
                Callback::choose_kind(FeedbackKind::Improvement).to_payload(),
            )
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::{InlineKeyboardButton as Btn, InlineKeyboardMarkup as Markup, ReplyMarkup as Reply};

    use crate::CALLBACK_VERSION;

    use super::*;

    #[test]
    fn test_feedback_keyboard() {
        let cb = |s| format!("{CALLBACK_VERSION}:{s}");

        let res: ReplyMarkup = Keyboards::feedback().into();
        similar_asserts::assert_eq!(
            res,
            Reply::InlineKeyboard(Markup::new(vec![vec![
                Btn::callback(LIKE_BUTTON, cb("feedback:like")),
                Btn::callback(IMPROVE_BUTTON, cb("feedback:improve")),
            ]]))
        );
    }

    #[test]
    fn test_main_keyboard_has_menu_labels() {
        let keyboard = Keyboards::main();
        let labels: Vec<_> = keyboard.keyboard.iter().flatten().map(|b| b.text.as_str()).collect();

        assert_eq!(labels, [FEEDBACK_LABEL, HELP_LABEL, RESOURCES_LABEL]);
        assert!(keyboard.is_persistent);
    }
}
