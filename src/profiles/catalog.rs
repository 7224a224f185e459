use super::BotCategory;

const SEARCH_ENGINE: &[&str] = &[
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    "Mozilla/5.0 (compatible; Bingbot/2.0; +http://www.bing.com/bingbot.htm)",
    "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)",
    "DuckDuckBot/1.0; (+http://duckduckgo.com/duckduckbot.html)",
    "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)",
];

const SCRAPING_FRAMEWORK: &[&str] = &[
    "Scrapy/2.11.0 (+https://scrapy.org)",
    "Mozilla/5.0 (compatible; Scrapy/2.5.0; +https://scrapy.org)",
    "python-scrapy/2.8.0",
];

const HTTP_LIBRARY: &[&str] = &[
    "python-requests/2.31.0",
    "curl/8.1.2",
    "Go-http-client/1.1",
    "axios/1.6.0",
    "node-fetch/3.3.0",
    "Java/17.0.1",
    "libwww-perl/6.67",
    "Ruby",
    "PHP/8.2",
    "wget/1.21",
];

const AI_BOT: &[&str] = &[
    "GPTBot/1.0 (+https://openai.com/gptbot)",
    "ChatGPT-User/1.0",
    "Claude-Web/1.0",
    "anthropic-ai/1.0",
    "CCBot/2.0 (https://commoncrawl.org/faq/)",
    "Google-Extended",
];

const MONITORING: &[&str] = &[
    "Pingdom.com_bot_version_1.4",
    "UptimeRobot/2.0",
    "StatusCake",
    "Site24x7",
    "Datadog/Synthetics",
    "NewRelicPinger/1.0",
];

const SOCIAL_MEDIA: &[&str] = &[
    "Twitterbot/1.0",
    "facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)",
    "LinkedInBot/1.0",
    "Slackbot-LinkExpanding 1.0",
    "TelegramBot (like TwitterBot)",
    "Discordbot/2.0",
];

const SEO_TOOL: &[&str] = &[
    "AhrefsBot/7.0",
    "SemrushBot/7~bl",
    "MJ12bot/v1.4.8",
    "DotBot/1.2",
    "Screaming Frog SEO Spider/19.0",
];

const BROWSER: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// The empty entry models a client that sends no User-Agent header at all.
const MALICIOUS: &[&str] = &[
    "malicious-bot/1.0",
    "evil-crawler/2.0",
    "bad-spider",
    "",
    "sqlmap/1.7",
    "nikto/2.5.0",
];

pub(super) const fn user_agents(category: BotCategory) -> &'static [&'static str] {
    match category {
        BotCategory::SearchEngine => SEARCH_ENGINE,
        BotCategory::ScrapingFramework => SCRAPING_FRAMEWORK,
        BotCategory::HttpLibrary => HTTP_LIBRARY,
        BotCategory::AiBot => AI_BOT,
        BotCategory::Monitoring => MONITORING,
        BotCategory::SocialMedia => SOCIAL_MEDIA,
        BotCategory::SeoTool => SEO_TOOL,
        BotCategory::Browser => BROWSER,
        BotCategory::Malicious => MALICIOUS,
    }
}
