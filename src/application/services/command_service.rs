use crate::application::errors::CommandError;
use crate::application::messaging::MessageParser;
use crate::application::templates as t;
use crate::domain::entities::{Command, CommandAction, CommandInput, CommandRegistry};

/// Where a command message goes once looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// Known command with its argument requirement satisfied
    Execute { action: CommandAction, input: CommandInput },
    /// Known command that needs an argument and got none
    Usage(&'a str),
}

/// Maps command tokens to actions; the table is fixed after construction
pub struct CommandRouter {
    registry: CommandRegistry,
    parser: MessageParser,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            parser: MessageParser::new(prefix),
        }
    }

    /// Router with the full built-in command set
    pub fn with_defaults(prefix: impl Into<String>) -> Result<Self, CommandError> {
        let mut router = Self::new(prefix);
        for command in default_commands() {
            router.register(command)?;
        }
        Ok(router)
    }

    pub fn register(&mut self, command: Command) -> Result<(), CommandError> {
        self.registry.register(command)
    }

    /// `None` when the text is not a command or names an unknown one;
    /// the caller then treats it as free text.
    pub fn route(&self, text: &str) -> Option<Route<'_>> {
        let input = self.parser.parse_command(text)?;
        let command = self.registry.get(&input.name)?;

        if let Some(usage) = command.usage.as_deref() {
            if !input.has_argument() {
                return Some(Route::Usage(usage));
            }
        }

        tracing::debug!("Command: /{} with argument: {:?}", input.name, input.argument);
        Some(Route::Execute {
            action: command.action,
            input,
        })
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.registry.all()
    }

    pub fn prefix(&self) -> &str {
        self.parser.prefix()
    }
}

fn default_commands() -> Vec<Command> {
    use CommandAction as A;

    vec![
        Command::new("start", A::Start).with_description("显示欢迎消息"),
        Command::new("help", A::Help).with_description("获取帮助信息"),
        Command::new("info", A::Info).with_description("查看机器人信息"),
        Command::new("echo", A::Echo)
            .with_description("回显你的消息")
            .with_usage(t::USAGE_ECHO),
        Command::new("weather", A::Weather)
            .with_description("查看天气信息")
            .with_usage(t::USAGE_WEATHER),
        Command::new("translate", A::Translate)
            .with_description("翻译文本")
            .with_usage(t::USAGE_TRANSLATE),
        Command::new("qr", A::Qr)
            .with_description("生成二维码")
            .with_usage(t::USAGE_QR),
        Command::new("short", A::Short)
            .with_description("缩短URL链接")
            .with_usage(t::USAGE_SHORT),
        Command::new("joke", A::Joke).with_description("随机笑话"),
        Command::new("roll", A::Roll).with_description("掷骰子"),
        Command::new("coin", A::Coin).with_description("抛硬币"),
        Command::new("random", A::Random).with_description("生成随机数"),
        Command::new("stats", A::Stats).with_description("查看个人统计"),
        Command::new("feedback", A::Feedback)
            .with_description("发送反馈")
            .with_usage(t::USAGE_FEEDBACK),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> CommandRouter {
        CommandRouter::with_defaults("/").unwrap()
    }

    #[test]
    fn test_default_table() {
        let router = router();
        let names: Vec<&str> = router.commands().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "start", "help", "info", "echo", "weather", "translate", "qr", "short", "joke",
                "roll", "coin", "random", "stats", "feedback",
            ]
        );
    }

    #[test]
    fn test_blank_argument_gives_usage() {
        let router = router();
        for command in router.commands().filter(|c| c.requires_argument()) {
            let usage = command.usage.as_deref().unwrap();
            for text in [format!("/{}", command.name), format!("/{}    ", command.name)] {
                assert_eq!(router.route(&text), Some(Route::Usage(usage)), "{text}");
            }
        }
    }

    #[test]
    fn test_execute_with_argument() {
        assert_eq!(
            router().route("/echo hello world"),
            Some(Route::Execute {
                action: CommandAction::Echo,
                input: CommandInput::new("echo", "hello world"),
            })
        );
    }

    #[test]
    fn test_optional_argument_commands_run_bare() {
        let router = router();
        for name in ["start", "help", "info", "joke", "roll", "coin", "random", "stats"] {
            assert!(
                matches!(router.route(&format!("/{name}")), Some(Route::Execute { .. })),
                "/{name}"
            );
        }
    }

    #[test]
    fn test_unknown_command_falls_through() {
        let router = router();
        assert_eq!(router.route("/dance now"), None);
        assert_eq!(router.route("/Echo hi"), None);
        assert_eq!(router.route("just text"), None);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut router = router();
        assert!(matches!(
            router.register(Command::new("echo", CommandAction::Echo)),
            Err(CommandError::Duplicate(_))
        ));
    }
}
