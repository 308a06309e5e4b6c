use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use decida_core::duel::Category;
use decida_core::user::PREMIUM_ENERGY;
use decida_core::{CoreError, GameConfig, GameSession, VoteReport};
use decida_provider::{DuelProvider, fetch_or_fallback};

pub fn run(
    category: &str,
    seed: u64,
    energy: i32,
    flash_delay: u64,
    offline: bool,
    api_key: Option<&str>,
) -> Result<(), String> {
    let mut category = super::parse_category(category)?;
    let provider = super::make_provider(offline, api_key);

    let config = GameConfig::default()
        .with_seed(seed)
        .with_energy(energy)
        .with_flash_delay(flash_delay as i64);
    let mut session = GameSession::new(config);

    println!("  {} Decida Aí", "Bem-vindo ao".bold());
    println!("  Categoria: {category} | Seed: {seed}");
    println!("  Digite 'help' para os comandos, 'quit' para sair.\n");

    load_duel(&mut session, provider.as_ref(), category);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, rest) = match input.split_once(' ') {
            Some((c, r)) => (c.to_lowercase(), r.trim()),
            None => (input.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "a" | "b" => match session.vote(&cmd.to_uppercase()) {
                Ok(report) => print_vote_result(&session, &report),
                Err(CoreError::EnergyExhausted) => print_monetization_prompt(),
                Err(e) => println!("{}\n", e.to_string().yellow()),
            },
            "n" | "next" => match session.request_next_duel() {
                Ok(()) => load_duel(&mut session, provider.as_ref(), category),
                Err(_) => print_monetization_prompt(),
            },
            "s" | "share" => match session.share_text() {
                Ok(text) => println!("{text}\n"),
                Err(e) => println!("{}\n", e.to_string().yellow()),
            },
            "m" | "missions" => print_missions(&session),
            "r" | "rank" => print_leaderboard(&mut session),
            "cat" => match rest.parse::<Category>() {
                Ok(c) => {
                    category = c;
                    println!("  Categoria: {category}\n");
                }
                Err(e) => println!("{}\n", e.to_string().yellow()),
            },
            "premium" => {
                session.go_premium();
                println!("  {} Energia infinita liberada.\n", "Você é VIP! 👑".bold());
            }
            "ad" => {
                println!("  {}", "Assistindo anúncio...".dimmed());
                thread::sleep(Duration::from_millis(1500));
                session.watch_ad();
                println!("  +3 de energia! ({})\n", energy_display(&session));
            }
            "h" | "help" => print_help(),
            "q" | "quit" => break,
            other => println!("{}\n", format!("comando desconhecido: {other}").yellow()),
        }
    }

    Ok(())
}

fn load_duel(session: &mut GameSession, provider: &dyn DuelProvider, category: Category) {
    println!("  {}", "Gerando duelo...".dimmed());
    let duel = fetch_or_fallback(provider, category);
    session.begin_duel(duel);
    print_duel(session);
}

fn energy_display(session: &GameSession) -> String {
    let user = session.user();
    if user.is_premium || user.energy >= PREMIUM_ENERGY {
        "⚡ ∞".to_string()
    } else {
        format!("⚡ {}/{}", user.energy, user.max_energy)
    }
}

fn print_duel(session: &GameSession) {
    let Some(duel) = session.current_duel() else {
        return;
    };

    println!();
    if session.flash_event_active() {
        println!("  {}", "🔥 DOUBLE XP ATIVO".purple().bold());
    }
    if duel.is_rare {
        println!("  {}", "✨ DUELO RARO (3x XP)".yellow().bold());
    }
    println!(
        "  [{}] {}  |  {} votos  |  {}",
        duel.category,
        energy_display(session),
        duel.total_votes,
        session.user().title.dimmed()
    );
    println!("\n  {}\n", duel.question.bold());
    println!("  (a) {}", duel.options[0].text);
    println!("  (b) {}\n", duel.options[1].text);
}

fn print_vote_result(session: &GameSession, report: &VoteReport) {
    let Some(duel) = session.current_duel() else {
        return;
    };
    let selected = session.selected_option().unwrap_or_default();

    println!();
    for option in &duel.options {
        let marker = if option.id == selected { "▶" } else { " " };
        println!("  {marker} {}% — {}", option.percentage, option.text);
    }
    println!();

    if report.won {
        println!("  {} Você pensa como a maioria.", "Acertou!".green().bold());
    } else {
        println!("  {} Você é do time da minoria.", "Errou!".red().bold());
    }
    println!(
        "  +{} XP  |  Streak: {}  |  {}",
        report.xp_gained,
        report.streak,
        energy_display(session)
    );
    if report.level_up {
        println!(
            "  {} Nível {} — {}",
            "LEVEL UP!".cyan().bold(),
            session.user().level,
            session.user().title
        );
    }
    for description in &report.completed_missions {
        println!("  {} {description}", "Missão completa!".green());
    }
    println!("\n  'next' para o próximo duelo, 'share' para compartilhar.\n");
}

fn print_missions(session: &GameSession) {
    println!("\n  {}\n", "Missões Diárias".bold());
    for mission in &session.user().missions {
        let status = if mission.completed {
            "✓".green().to_string()
        } else {
            format!("{}/{}", mission.current, mission.target)
        };
        println!(
            "  [{status}] {} (+{} XP)",
            mission.description, mission.reward_xp
        );
    }
    println!();
}

fn print_leaderboard(session: &mut GameSession) {
    let slice = session.leaderboard_slice();
    println!("\n  {}\n", "Ranking Global".bold());
    for entry in &slice {
        let line = format!(
            "  #{:<6} {:<20} {:>8} XP  🔥 {}",
            entry.rank, entry.name, entry.score, entry.streak
        );
        if entry.is_bot {
            println!("{line}");
        } else {
            println!("{}", line.cyan().bold());
        }
    }
    println!("\n  {}\n", "+ 54.000 outros jogadores abaixo de você".dimmed());
}

fn print_monetization_prompt() {
    println!("\n  {}", "⚡ Zero Energia!".red().bold());
    println!("  Você estava indo tão bem! Não perca seu streak diário.");
    println!("  'premium' — Seja VIP 👑 (jogadas infinitas)");
    println!("  'ad'      — Assista um anúncio (+3 de energia)");
    println!("  'quit'    — Talvez depois\n");
}

fn print_help() {
    println!("\n  a / b        votar na opção A ou B");
    println!("  next (n)     próximo duelo");
    println!("  share (s)    texto de compartilhamento");
    println!("  missions (m) missões diárias");
    println!("  rank (r)     ranking global");
    println!("  cat <nome>   trocar categoria");
    println!("  premium      assinar VIP");
    println!("  ad           assistir anúncio (+3 energia)");
    println!("  quit (q)     sair\n");
}
