//! Scripted console walkthrough of the Waystone tour engines.
//!
//! Wires the locale bus, the deterministic scheduler, and all three
//! engines together the way a presentation host would, then drives a
//! short tour: a typewriter welcome, a word puzzle with a hint, a locale
//! switch mid-round, and a scored quiz against offline gateways.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use waystone_core::clock::SystemClock;
use waystone_core::locale::{LocaleBus, LocaleId};
use waystone_core::scheduler::Scheduler;
use waystone_core::settings::MemorySettingsStore;
use waystone_puzzle::{HintFlow, PuzzleConfig, PuzzleEntry, PuzzleTimer, WordPuzzleEngine};
use waystone_quiz::{QuizEngine, QuizPhase, flow};
use waystone_reveal::{RevealConfig, RevealTimer, TextRevealEngine};

mod content;
mod gateways;

use gateways::{CannedHintGateway, CannedStatsGateway};

/// Unified timer token covering every engine on the shared timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TourTimer {
    Reveal(RevealTimer),
    Puzzle(PuzzleTimer),
}

impl From<RevealTimer> for TourTimer {
    fn from(timer: RevealTimer) -> Self {
        TourTimer::Reveal(timer)
    }
}

impl From<PuzzleTimer> for TourTimer {
    fn from(timer: PuzzleTimer) -> Self {
        TourTimer::Puzzle(timer)
    }
}

type SharedScheduler = Rc<RefCell<Scheduler<TourTimer>>>;
type SharedReveal = Rc<RefCell<TextRevealEngine>>;
type SharedPuzzle = Rc<RefCell<WordPuzzleEngine>>;

/// Advances the logical clock deadline by deadline until no timers are
/// pending, routing each fired token to its engine.
fn drain_scheduler(sched: &SharedScheduler, reveal: &SharedReveal, puzzle: &SharedPuzzle) {
    loop {
        let Some(due) = sched.borrow_mut().next_deadline() else {
            break;
        };
        let fired = {
            let mut sched = sched.borrow_mut();
            let dt = due.saturating_sub(sched.now());
            sched.advance(dt)
        };
        for fire in fired {
            match fire.token {
                TourTimer::Reveal(timer) => {
                    reveal.borrow_mut().on_timer(&mut *sched.borrow_mut(), timer);
                }
                TourTimer::Puzzle(timer) => puzzle.borrow_mut().on_timer(timer),
            }
        }
    }
}

fn welcome_walkthrough(sched: &SharedScheduler, reveal: &SharedReveal, puzzle: &SharedPuzzle, locale: LocaleId) {
    println!("--- Welcome board ---");
    reveal
        .borrow_mut()
        .set_text(&mut *sched.borrow_mut(), content::welcome_text(locale), true);

    // Let one second of the typewriter play out, then skip the rest.
    {
        let fired = sched.borrow_mut().advance(Duration::from_secs(1));
        for fire in fired {
            if let TourTimer::Reveal(timer) = fire.token {
                reveal.borrow_mut().on_timer(&mut *sched.borrow_mut(), timer);
            }
        }
    }
    println!("after 1s: {}", reveal.borrow().visible_text());

    reveal.borrow_mut().request_skip(&mut *sched.borrow_mut());
    drain_scheduler(sched, reveal, puzzle);
    println!("skipped:  {}", reveal.borrow().visible_text());
    for event in reveal.borrow_mut().take_events() {
        tracing::info!(?event, "reveal event");
    }
}

async fn puzzle_walkthrough(
    sched: &SharedScheduler,
    reveal: &SharedReveal,
    puzzle: &SharedPuzzle,
    bus: &Rc<LocaleBus>,
    entry: PuzzleEntry,
) -> Result<(), Box<dyn Error>> {
    println!("--- Word puzzle ---");
    puzzle
        .borrow_mut()
        .start(&mut *sched.borrow_mut(), entry, bus.current())?;
    println!("word: {}", puzzle.borrow().display_word());

    let mut hints = HintFlow::new();
    let gateway = CannedHintGateway;

    for letter in ['M', 'E', 'X', 'N'] {
        puzzle.borrow_mut().guess(&mut *sched.borrow_mut(), letter)?;
        println!(
            "guess {letter}: {} ({} wrong)",
            puzzle.borrow().display_word(),
            puzzle.borrow().incorrect_count()
        );
    }

    // Mid-round hint, bracketed so a UI could show the busy flag.
    let symbol_key = puzzle.borrow_mut().begin_hint_request()?;
    let hint = hints.fetch(&gateway, &symbol_key, bus.current()).await;
    puzzle.borrow_mut().complete_hint_request(hint);
    println!("hint: {}", puzzle.borrow().hint_text().unwrap_or_default());

    // Switching the language mid-round restarts the round: the word to
    // guess differs per language.
    println!("--- Locale switch mid-round ---");
    bus.change(1)?;
    drain_scheduler(sched, reveal, puzzle);
    println!("word: {}", puzzle.borrow().display_word());
    println!("board: {}", reveal.borrow().visible_text());

    for letter in ['מ', 'נ', 'ו', 'ר', 'ה'] {
        puzzle.borrow_mut().guess(&mut *sched.borrow_mut(), letter)?;
    }
    println!(
        "solved: {} ({:?})",
        puzzle.borrow().display_word(),
        puzzle.borrow().outcome()
    );

    // The round-closed timer fires after the end-display delay.
    drain_scheduler(sched, reveal, puzzle);
    for event in puzzle.borrow_mut().take_events() {
        tracing::info!(?event, "puzzle event");
    }

    bus.change(0)?;
    drain_scheduler(sched, reveal, puzzle);
    Ok(())
}

async fn quiz_walkthrough(
    quiz: &Rc<RefCell<QuizEngine>>,
    locale: LocaleId,
) -> Result<(), Box<dyn Error>> {
    println!("--- Quiz ---");
    let gateway = CannedStatsGateway;
    let clock = SystemClock;

    quiz.borrow_mut().start();
    // One right answer, one wrong.
    for answer_index in [0, 0] {
        {
            let quiz = quiz.borrow();
            println!(
                "{} {}",
                quiz.progress_label().unwrap_or_default(),
                quiz.question_text(locale).unwrap_or_default()
            );
        }
        flow::answer_question(&mut quiz.borrow_mut(), &gateway, &clock, answer_index).await?;
        if let Some(stats) = quiz.borrow().stats_text(locale) {
            println!("  {stats}");
        }
        quiz.borrow_mut().advance()?;
    }

    flow::resolve_finish(&mut quiz.borrow_mut(), &gateway, &clock).await?;
    if let Some(summary) = quiz.borrow().final_score_text(locale) {
        println!("{summary}");
    }
    for event in quiz.borrow_mut().take_events() {
        tracing::info!(?event, "quiz event");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Waystone walkthrough");

    let entries = content::puzzle_entries()?;
    let quiz_data = content::quiz()?;

    let settings = Rc::new(MemorySettingsStore::new());
    let bus = LocaleBus::new(settings, 2);

    let sched: SharedScheduler = Rc::new(RefCell::new(Scheduler::new()));
    let reveal: SharedReveal = Rc::new(RefCell::new(TextRevealEngine::new(RevealConfig::default())?));
    let puzzle: SharedPuzzle = Rc::new(RefCell::new(WordPuzzleEngine::new(PuzzleConfig::default())?));
    let quiz = Rc::new(RefCell::new(QuizEngine::new(quiz_data)?));

    // Every engine follows the bus; the guards keep the subscriptions
    // alive for the whole walkthrough.
    let _reveal_sub = {
        let reveal = reveal.clone();
        let sched = sched.clone();
        bus.subscribe(move |change| {
            reveal.borrow_mut().set_text(
                &mut *sched.borrow_mut(),
                content::welcome_text(change.current),
                true,
            );
        })
    };
    let _puzzle_sub = {
        let puzzle = puzzle.clone();
        let sched = sched.clone();
        bus.subscribe(move |change| {
            if let Err(error) = puzzle
                .borrow_mut()
                .on_locale_changed(&mut *sched.borrow_mut(), change.current)
            {
                tracing::warn!(%error, "puzzle could not follow the locale change");
            }
        })
    };
    let _quiz_sub = {
        let quiz = quiz.clone();
        bus.subscribe(move |_| quiz.borrow_mut().on_locale_changed())
    };

    welcome_walkthrough(&sched, &reveal, &puzzle, bus.current());

    let entry = entries
        .into_iter()
        .next()
        .ok_or("no puzzle entries configured")?;
    puzzle_walkthrough(&sched, &reveal, &puzzle, &bus, entry).await?;

    quiz_walkthrough(&quiz, bus.current()).await?;
    debug_assert_eq!(quiz.borrow().phase(), QuizPhase::Finished);

    tracing::info!("Walkthrough finished");
    Ok(())
}
