//! Reply texts
//!
//! `{name}` is replaced with the sender's display name, other placeholders
//! are filled by the response service.

pub const BOT_VERSION: &str = "2.0";

/// Display name used in free-text replies when the sender has none
pub const DEFAULT_FRIEND_NAME: &str = "朋友";
/// Display name used in `/stats` when the sender has none
pub const DEFAULT_USER_NAME: &str = "用户";
pub const UNKNOWN_JOIN_DATE: &str = "未知";

pub const WELCOME: &str = "
👋 欢迎使用我们的Telegram机器人！

🔧 基础功能:
/start - 显示此欢迎消息
/help - 获取帮助信息
/info - 查看机器人信息
/echo [消息] - 回显你的消息

🎯 实用工具:
/weather [城市] - 查看天气信息
/translate [文本] - 翻译文本
/qr [文本] - 生成二维码
/short [链接] - 缩短URL链接

🎲 娱乐功能:
/joke - 随机笑话
/roll - 掷骰子
/coin - 抛硬币
/random [数字] - 生成随机数

📊 用户功能:
/stats - 查看个人统计
/feedback [内容] - 发送反馈

直接发送任何消息，我会智能回复你！
";

pub const HELP: &str = "
🤖 机器人功能帮助

📋 基础命令:
• /start - 开始使用机器人
• /help - 显示此帮助信息
• /info - 查看机器人信息
• /echo [消息] - 回显你发送的消息

🔧 实用工具:
• /weather [城市名] - 查看指定城市天气
• /translate [文本] - 翻译文本(自动检测语言)
• /qr [文本] - 为文本生成二维码
• /short [URL] - 缩短长链接

🎮 娱乐功能:
• /joke - 获取随机笑话
• /roll - 掷一个六面骰子
• /coin - 抛硬币(正面/反面)
• /random [最大值] - 生成1到指定数字的随机数

📈 个人功能:
• /stats - 查看你的使用统计
• /feedback [内容] - 向开发者发送反馈

💡 使用技巧:
- 直接发送消息进行智能对话
- 发送图片、文档等媒体文件
- 支持群组聊天和私聊
";

// Usage replies for commands that need an argument
pub const USAGE_ECHO: &str = "请在/echo后面添加要回显的消息";
pub const USAGE_WEATHER: &str = "请输入城市名称，例如: /weather 北京";
pub const USAGE_TRANSLATE: &str = "请输入要翻译的文本，例如: /translate Hello World";
pub const USAGE_QR: &str = "请输入要生成二维码的内容，例如: /qr https://example.com";
pub const USAGE_SHORT: &str = "请输入要缩短的URL，例如: /short https://www.example.com/very/long/url";
pub const USAGE_FEEDBACK: &str = "请输入您的反馈内容，例如: /feedback 建议增加更多功能";
pub const USAGE_RANDOM: &str = "请输入有效数字，例如: /random 50";

pub const ECHO_PREFIX: &str = "🔄 你说: ";

pub const WEATHER: &str = "
🌤 {city} 天气信息

🌡 温度: 22°C
💨 风速: 5 km/h
💧 湿度: 65%
☁️ 天气: 多云
🌅 日出: 06:30
🌇 日落: 18:45

💡 提示: 这是演示数据，可集成真实天气API
";

pub const TRANSLATE: &str = "
🌐 翻译结果

原文: {text}
译文: {translated}

💡 提示: 这是演示功能，可集成真实翻译API
";

pub const QR: &str = "
📱 二维码生成

内容: {text}
🔗 二维码链接: {link}

💡 提示: 点击链接查看或下载二维码图片
";

pub const QR_API: &str = "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=";

pub const SHORT: &str = "
🔗 链接缩短

原链接: {url}
短链接: {short}

💡 提示: 这是演示功能，可集成真实短链接服务
";

pub const SHORT_BASE: &str = "https://short.ly/";

pub const JOKES: &[&str] = &[
    "为什么程序员喜欢黑暗？因为光亮会产生bug！ 😄",
    "什么是程序员最喜欢的歌？Hello World！ 🎵",
    "为什么Python这么受欢迎？因为它很好养！ 🐍",
    "程序员的三大谎言：这只是临时的，明天就写注释，这个bug很容易修复。 😅",
    "什么是最短的编程笑话？Java。 ☕",
    "为什么程序员总是搞混圣诞节和万圣节？因为 Oct 31 == Dec 25！ 🎃🎄",
    "程序员去酒吧，要了1024杯啤酒。服务员问：为什么不要1000杯？程序员：我只要整数杯！ 🍺",
];

pub const DICE_FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];
pub const COIN_SIDES: &[&str] = &["正面 🪙", "反面 🔄"];

pub const STATS: &str = "
📊 {name} 的使用统计

👤 用户ID: {id}
📅 加入日期: {join_date}
💬 发送消息数: {count}
🤖 机器人版本: {version}

💡 继续使用来增加你的统计数据！
";

pub const FEEDBACK_ACK: &str = "
📝 反馈已收到！

感谢您的宝贵意见和建议！
我们会认真考虑您的反馈，持续改进机器人功能。

如有紧急问题，请直接联系管理员。
";

pub const INFO: &str = "
ℹ️ 机器人信息

• 版本: {version}
• 运行环境: Rust / Tokio
• 用户数量: {users}
• Redis状态: {status}
• 环境变量: {url_status}{details}{error}

Bot ID: @{username}
";

// Intent replies, in rule order

pub const GREETINGS: &[&str] = &[
    "你好，{name}！很高兴见到你！ 😊",
    "嗨，{name}！今天过得怎么样？ 🌟",
    "你好呀，{name}！有什么我可以帮助你的吗？ 💫",
];

pub const THANKS_REPLIES: &[&str] = &[
    "不客气，{name}！很乐意为你服务！ 🤝",
    "不用谢，{name}！这是我应该做的！ 😊",
    "很高兴能帮到你，{name}！ ✨",
];

pub const FAREWELLS: &[&str] = &[
    "再见，{name}！期待下次见面！ 👋",
    "拜拜，{name}！记得常来聊天哦！ 🌈",
    "晚安，{name}！祝你好梦！ 🌙",
];

pub const WEATHER_HINT: &str = "想查看天气吗，{name}？试试发送 /weather [城市名] 来获取天气信息！ 🌤";

pub const HELP_HINT: &str = "我有很多功能哦，{name}！发送 /help 查看完整的功能列表，或者 /start 看看我能为你做什么！ 🤖";

pub const JOKE_HINT: &str = "想听笑话吗，{name}？试试 /joke 来获取随机笑话！或者 /roll 掷个骰子玩玩！ 🎲😄";

pub const COMFORT: &str = "听起来你可能需要放松一下，{name}。要不要听个笑话让心情好一些？发送 /joke 试试看！ 🌈";

pub const ENCOURAGE: &str = "很高兴听到你心情不错，{name}！继续保持这种积极的态度！ ✨";

pub const COMPLIMENT_REPLIES: &[&str] = &[
    "谢谢夸奖，{name}！我会继续努力的！ 😊",
    "你的认可是我最大的动力，{name}！ ⭐",
    "嘿嘿，被你这么一夸我都不好意思了，{name}！ 😄",
];

pub const IDENTITY: &str = "我是一个多功能的Telegram机器人，{name}！我可以聊天、提供实用工具、娱乐功能等。发送 /start 了解更多！ 🤖";

pub const FALLBACK_REPLIES: &[&str] = &[
    "收到你的消息了，{name}！ 📝",
    "谢谢你的消息，{name}！💬",
    "我听到了，{name}！有什么我可以帮助你的吗？ 🤔",
    "很有趣的消息，{name}！ ✨",
    "继续聊天吧，{name}！我很喜欢和你交流！ 💫",
    "说得不错，{name}！还有什么想聊的吗？ 🌟",
];

pub const TIME_REPLY: &str = "⏰ 当前时间是: {time}\n📅 今天是{weekday}";

pub const MEDIA_ACK: &str = "收到你发送的{media}！感谢分享！";
pub const MEDIA_DEFAULT: &str = "📎 媒体文件";

/// Fill `{name}`
pub fn with_name(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}
