use decida_provider::fetch_or_fallback;

pub fn run(category: &str, offline: bool, api_key: Option<&str>) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let provider = super::make_provider(offline, api_key);

    let duel = fetch_or_fallback(provider.as_ref(), category);

    println!("  [{}] {} votos", duel.category, duel.total_votes);
    if duel.is_rare {
        println!("  ✨ raro");
    }
    println!("\n  {}\n", duel.question);
    for option in &duel.options {
        println!("  ({}) {} — {}%", option.id, option.text, option.percentage);
    }

    Ok(())
}
