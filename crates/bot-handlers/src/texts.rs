use teloxide::utils::markdown;

use db::models::{FeedbackKind, Stats};

pub(crate) const START_PHOTO: &str = "https://disk.yandex.ru/i/6MYWiiVp5z7l2g";
pub(crate) const START_CAPTION: &str = "<b>Уважаемый студент! Я <s>бот</s> кот для сбора обратной связи.</b>\n\
    <b>Для того, чтобы поделиться тем, что тебе понравилось и/или ты хотел бы добавить, нажми кнопку ниже.</b>";

pub(crate) const FEEDBACK_PROMPT: &str = "<b>Выбери тип обратной связи:</b>";

pub(crate) const HELP: &str = "<b>Для того, чтобы оставить обратную связь, нужно нажать на кнопку -Обратная связь-.</b>\n\
    <b>В появившемся сообщении выбрать тип обратной связи.</b>\n\
    <b>После этого написать свое сообщение для обратной связи.</b>\n\
    <b>Кнопка -Электронные ресурсы- содержит полезные ссылки.</b>";

pub(crate) const STATS_ERROR: &str = "Не удалось получить статистику. Попробуйте позже.";

pub(crate) const GENERIC_ERROR: &str = "❌ Произошла ошибка при обработке вашего запроса.\n\
    Пожалуйста, попробуйте позже или обратитесь к администратору.";

pub(crate) const FEEDBACK_SAVED: &str = "Спасибо! Твой отзыв сохранён.";

pub(crate) const CALLBACK_EMPTY: &str = "Что-то пошло не так: пустой ответ кнопки";
pub(crate) const CALLBACK_INVALID: &str = "Эта кнопка устарела, открой меню обратной связи заново";
pub(crate) const CALLBACK_TRY_AGAIN: &str = "Что-то пошло не так, попробуй ещё раз";

pub(crate) const RESOURCES_PHOTO: &str = "https://disk.yandex.ru/i/77Kf7Ak0Q6uTOQ";

pub(crate) struct Resource {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    link_text: &'static str,
    url: &'static str,
}

pub(crate) const RESOURCES: [Resource; 5] = [
    Resource {
        icon: "📚",
        title: "Психологическая служба РГПУ им. А. И. Герцена",
        description: "Помощь и поддержка студентов.",
        link_text: "Сайт психологической службы",
        url: "https://inpsy.hspu.org/",
    },
    Resource {
        icon: "🖼️",
        title: "Виртуальный тур по Русскому музею",
        description: "Окунись в искусство и культуру.",
        link_text: "Посетить музей",
        url: "http://virtual.rusmuseumvrm.ru",
    },
    Resource {
        icon: "💪",
        title: "Студенческий фитнес клуб РГПУ им. А. И. Герцена \"PROFIT\"",
        description: "Поддержи здоровье и активность!",
        link_text: "Записаться в клуб",
        url: "https://vk.com/studprofit",
    },
    Resource {
        icon: "🎮",
        title: "Герценовский игровой клуб",
        description: "Развлечение и новые знакомства!",
        link_text: "Присоединиться к клубу",
        url: "https://vk.com/herzengame",
    },
    Resource {
        icon: "🌍",
        title: "Атлас студенческих объединений РГПУ им. А. И. Герцена",
        description: "Узнай больше о возможностях студенческой жизни.",
        link_text: "Смотреть атлас объединений",
        url: "https://www.herzen.spb.ru/about/struct-uni/contr/dep-edu-pract-youth-projects/atlas-studencheskikh-obedineniy/",
    },
];

/// Caption for resources photo, in MarkdownV2
pub(crate) fn resources_caption() -> String {
    RESOURCES
        .iter()
        .map(|r| {
            format!(
                "{} {}\n{}\n👉 {}",
                r.icon,
                markdown::bold(&markdown::escape(r.title)),
                markdown::escape(r.description),
                markdown::link(r.url, &markdown::escape(r.link_text)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n\\-\\-\\-\n\n")
}

/// Stats message, in HTML
pub(crate) fn format_stats(stats: &Stats) -> String {
    format!(
        "<b>📊 Статистика отзывов:</b>\n\n\
         Всего отзывов: {}\n\
         Понравилось: {}\n\
         Добавить: {}",
        stats.total, stats.likes, stats.improvements
    )
}

pub(crate) fn feedback_text_prompt(kind: FeedbackKind) -> &'static str {
    match kind {
        FeedbackKind::Like => "<b>Напиши, что тебе понравилось:</b>",
        FeedbackKind::Improvement => "<b>Напиши, что ты хотел бы добавить:</b>",
    }
}
