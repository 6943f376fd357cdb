use teloxide::macros::BotCommands;

#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Начать работу с ботом")]
    Start,
    #[command(description = "Как оставить обратную связь")]
    Help,
    #[command(description = "Статистика отзывов")]
    Stats,
}
