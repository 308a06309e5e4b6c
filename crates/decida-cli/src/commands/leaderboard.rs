use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use decida_core::leaderboard::{LeaderboardEntry, avatar_url, estimate_rank, generate_slice};

pub fn run(xp: u64, streak: u32, seed: u64) -> Result<(), String> {
    let rank = estimate_rank(xp);
    let user = LeaderboardEntry {
        id: "user".to_string(),
        name: "Você".to_string(),
        score: xp,
        streak,
        avatar: avatar_url(&xp.to_string()),
        is_bot: false,
        rank,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let slice = generate_slice(&mut rng, rank, &user);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Nome", "XP", "Streak"]);

    for entry in &slice {
        let name = if entry.is_bot {
            entry.name.clone()
        } else {
            format!("{} ◀ você", entry.name)
        };
        table.add_row(vec![
            format!("#{}", entry.rank),
            name,
            entry.score.to_string(),
            entry.streak.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Rank estimado: #{rank}");
    println!("  + 54.000 outros jogadores abaixo de você");

    Ok(())
}
