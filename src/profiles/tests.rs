use super::*;

#[test]
fn pool_from_all_categories_covers_catalog() -> Result<(), String> {
    let pool = ProfilePool::from_categories(&BotCategory::ALL);
    let expected: usize = BotCategory::ALL
        .iter()
        .map(|category| category.user_agents().len())
        .sum();
    if pool.len() != expected {
        return Err(format!("Expected {} profiles, got {}", expected, pool.len()));
    }
    if expected != 51 {
        return Err(format!("Catalog size changed: {}", expected));
    }
    Ok(())
}

#[test]
fn pool_ignores_repeated_categories() -> Result<(), String> {
    let pool = ProfilePool::from_categories(&[BotCategory::AiBot, BotCategory::AiBot]);
    if pool.len() != BotCategory::AiBot.user_agents().len() {
        return Err(format!("Unexpected pool size {}", pool.len()));
    }
    if pool
        .as_slice()
        .iter()
        .any(|profile| profile.category() != BotCategory::AiBot)
    {
        return Err("Pool contained a foreign category".to_owned());
    }
    Ok(())
}

#[test]
fn pool_from_no_categories_is_empty() -> Result<(), String> {
    let pool = ProfilePool::from_categories(&[]);
    if !pool.is_empty() {
        return Err("Expected empty pool".to_owned());
    }
    Ok(())
}

#[test]
fn extra_profiles_follow_category_selection() -> Result<(), String> {
    let extra = vec![
        BotProfile::new(BotCategory::Monitoring, "InternalProbe/1.0"),
        BotProfile::new(BotCategory::Browser, "SomeBrowser/1.0"),
    ];
    let pool = ProfilePool::from_categories(&[BotCategory::Monitoring])
        .with_extra(extra, &[BotCategory::Monitoring]);
    let has_probe = pool
        .as_slice()
        .iter()
        .any(|profile| profile.user_agent() == "InternalProbe/1.0");
    let has_browser = pool
        .as_slice()
        .iter()
        .any(|profile| profile.category() == BotCategory::Browser);
    if !has_probe {
        return Err("Expected extra monitoring profile".to_owned());
    }
    if has_browser {
        return Err("Unselected category leaked into pool".to_owned());
    }
    Ok(())
}

#[test]
fn malicious_category_models_missing_user_agent() -> Result<(), String> {
    let pool = ProfilePool::from_categories(&[BotCategory::Malicious]);
    let missing = pool
        .as_slice()
        .iter()
        .find(|profile| profile.user_agent().is_empty())
        .ok_or_else(|| "Expected an empty User-Agent entry".to_owned())?;
    if missing.header_value().is_some() {
        return Err("Empty User-Agent must not produce a header value".to_owned());
    }
    Ok(())
}

#[test]
fn display_truncates_long_user_agents() -> Result<(), String> {
    let long = BotCategory::Browser
        .user_agents()
        .first()
        .copied()
        .ok_or_else(|| "Missing browser UA".to_owned())?;
    let shown = display_user_agent(long);
    if shown.chars().count() != USER_AGENT_DISPLAY_LIMIT + 3 {
        return Err(format!("Unexpected display length: {}", shown));
    }
    if !shown.ends_with("...") {
        return Err(format!("Missing ellipsis: {}", shown));
    }
    if !long.starts_with(shown.trim_end_matches("...")) {
        return Err("Display is not a prefix of the full User-Agent".to_owned());
    }
    Ok(())
}

#[test]
fn display_keeps_short_and_boundary_user_agents() -> Result<(), String> {
    let exact = "x".repeat(USER_AGENT_DISPLAY_LIMIT);
    if display_user_agent(&exact) != exact {
        return Err("50-character UA must not be truncated".to_owned());
    }
    if display_user_agent("curl/8.1.2") != "curl/8.1.2" {
        return Err("Short UA changed".to_owned());
    }
    if !display_user_agent("").is_empty() {
        return Err("Empty UA changed".to_owned());
    }
    Ok(())
}

#[test]
fn display_counts_characters_not_bytes() -> Result<(), String> {
    let wide = "é".repeat(60);
    let shown = display_user_agent(&wide);
    if shown.chars().count() != USER_AGENT_DISPLAY_LIMIT + 3 {
        return Err(format!("Unexpected char count {}", shown.chars().count()));
    }
    Ok(())
}

#[test]
fn category_names_round_trip_through_serde() -> Result<(), String> {
    for category in BotCategory::ALL {
        let json = serde_json::to_string(&category).map_err(|err| err.to_string())?;
        if json != format!("\"{}\"", category.as_str()) {
            return Err(format!("Unexpected JSON {}", json));
        }
    }
    Ok(())
}
