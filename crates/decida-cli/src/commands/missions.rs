use chrono::Utc;

use decida_core::daily_missions;

pub fn run() -> Result<(), String> {
    let missions = daily_missions(Utc::now());

    println!("  Missões Diárias\n");
    for mission in &missions {
        println!(
            "  [{}/{}] {} (+{} XP)",
            mission.current, mission.target, mission.description, mission.reward_xp
        );
        println!(
            "         expira em {}",
            mission.expires_at.format("%H:%M UTC")
        );
    }

    Ok(())
}
