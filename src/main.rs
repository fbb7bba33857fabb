mod data;
mod quiz;

use std::io::Write;
use std::path::Path;

use dotenv::dotenv;

use data::ReferenceData;
use quiz::area_population::{self, AreaPopulationQuizType};
use quiz::capital::{self, CapitalQuizType};
use quiz::flag;
use quiz::landmark::{self, LandmarkQuizType};
use quiz::locale::{self, Locale};
use quiz::score::{self, Response, Session, Verdict};
use quiz::{CorrectAnswer, Difficulty, GeneratedQuestion};

#[tokio::main]
async fn main() {
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting quiz session...");

    let data_dir = std::env::var("NATIONIQ_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let locale = Locale::from_tag(&std::env::var("NATIONIQ_LOCALE").unwrap_or_default());

    println!("Loading reference data from '{}'...", data_dir);
    let reference = ReferenceData::load(Path::new(&data_dir))
        .await
        .expect("Failed to load reference data");
    println!(
        "Loaded {} countries and {} landmarks",
        reference.countries.len(),
        reference.landmarks.len()
    );

    let mut rng = rand::thread_rng();

    loop {
        println!();
        println!("What would you like to play?");
        println!("  1) Flag quiz");
        println!("  2) Capital quiz");
        println!("  3) Landmark quiz");
        println!("  4) Area & population quiz");
        println!("  q) Quit");

        let choice = read_line("> ");
        if choice.eq_ignore_ascii_case("q") {
            break;
        }
        if !matches!(choice.as_str(), "1" | "2" | "3" | "4") {
            println!("Please pick one of the options");
            continue;
        }

        let difficulty = read_difficulty();
        let count = read_count();

        let questions = match choice.as_str() {
            "1" => flag::generate(
                &reference.countries,
                &reference.tiers,
                difficulty,
                count,
                locale,
                &mut rng,
            ),
            "2" => {
                let quiz_type = read_choice(
                    "Quiz type: 1) Country → Capital  2) Capital → Country  3) Mixed",
                    &[
                        ("1", CapitalQuizType::CountryToCapital),
                        ("2", CapitalQuizType::CapitalToCountry),
                        ("3", CapitalQuizType::Mixed),
                    ],
                );
                capital::generate(
                    &reference.countries,
                    &reference.capital_names,
                    &reference.tiers,
                    difficulty,
                    count,
                    quiz_type,
                    locale,
                    &mut rng,
                )
            }
            "3" => {
                let quiz_type = read_choice(
                    "Quiz type: 1) Photo → Country  2) Photo → Name  3) Mixed",
                    &[
                        ("1", LandmarkQuizType::ToCountry),
                        ("2", LandmarkQuizType::ToName),
                        ("3", LandmarkQuizType::Mixed),
                    ],
                );
                landmark::generate(
                    &reference.landmarks,
                    difficulty,
                    count,
                    quiz_type,
                    locale,
                    &mut rng,
                )
            }
            _ => {
                let quiz_type = read_choice(
                    "Quiz type: 1) Single choice  2) Order selection",
                    &[
                        ("1", AreaPopulationQuizType::SingleChoice),
                        ("2", AreaPopulationQuizType::OrderSelection),
                    ],
                );
                area_population::generate(
                    &reference.countries,
                    &reference.tiers,
                    difficulty,
                    count,
                    quiz_type,
                    locale,
                    &mut rng,
                )
            }
        };

        let questions = match questions {
            Ok(questions) => questions,
            Err(err) => {
                println!("Could not build that quiz: {}", err);
                continue;
            }
        };

        let session = run_quiz(&questions);
        print_summary(&session, locale);
    }
}

fn run_quiz(questions: &[GeneratedQuestion]) -> Session {
    let mut session = Session::default();

    for (number, question) in questions.iter().enumerate() {
        println!();
        println!("Question {}/{}", number + 1, questions.len());
        if let Some(image) = &question.image {
            println!("[image: {}]", image);
        }
        if !question.prompt.is_empty() {
            println!("{}", question.prompt);
        }
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let response = match &question.answer {
            CorrectAnswer::Single(_) => {
                let picked = read_index(question.options.len());
                Response::Single(question.options[picked].clone())
            }
            CorrectAnswer::Ordered(_) => read_ordering(&question.options),
        };

        let verdict = score::evaluate(question, &response);
        session.record(&verdict);

        match verdict {
            Verdict::Correct => println!("Correct!"),
            Verdict::Wrong => match &question.answer {
                CorrectAnswer::Single(answer) => println!("Wrong! The answer was: {}", answer),
                CorrectAnswer::Ordered(answer) => {
                    println!("Wrong! The right order was: {}", answer.join(", "))
                }
            },
            Verdict::Partial { matched, total } => {
                println!("Partially correct ({}/{} positions)", matched, total);
                if let CorrectAnswer::Ordered(answer) = &question.answer {
                    println!("The right order was: {}", answer.join(", "));
                }
            }
        }
    }

    session
}

/// Ordered input mirrors the tap behavior: an index appends, repeating an
/// already chosen index removes it, and the answer is submitted the moment
/// the list is full.
fn read_ordering(options: &[String]) -> Response {
    let mut chosen: Vec<usize> = Vec::new();
    println!("Enter the options one by one; repeat a number to unpick it.");
    while chosen.len() < options.len() {
        let picked = read_index(options.len());
        if let Some(position) = chosen.iter().position(|&c| c == picked) {
            chosen.remove(position);
        } else {
            chosen.push(picked);
        }
        let current: Vec<&str> = chosen.iter().map(|&i| options[i].as_str()).collect();
        println!("  so far: [{}]", current.join(", "));
    }
    Response::Ordered(chosen.into_iter().map(|i| options[i].clone()).collect())
}

fn print_summary(session: &Session, locale: Locale) {
    println!();
    println!("Quiz finished!");
    println!(
        "Score: {:.1}/{} ({}%)  correct: {}  wrong: {}",
        session.score,
        session.total_questions,
        session.percent(),
        session.correct_answers,
        session.wrong_answers
    );
    println!("{}", locale::result_feedback(locale, session.percent()));
}

fn read_difficulty() -> Difficulty {
    read_choice(
        "Difficulty: 1) Easy  2) Medium  3) Hard  4) Very hard",
        &[
            ("1", Difficulty::Easy),
            ("2", Difficulty::Medium),
            ("3", Difficulty::Hard),
            ("4", Difficulty::VeryHard),
        ],
    )
}

fn read_count() -> usize {
    loop {
        let input = read_line("How many questions? ");
        match input.parse::<usize>() {
            Ok(count) if count > 0 => return count,
            _ => println!("Please enter a number greater than 0"),
        }
    }
}

fn read_choice<T: Copy>(prompt: &str, options: &[(&str, T)]) -> T {
    loop {
        println!("{}", prompt);
        let input = read_line("> ");
        if let Some((_, value)) = options.iter().find(|(key, _)| *key == input) {
            return *value;
        }
        println!("Please pick one of the options");
    }
}

/// 1-based on screen, 0-based in code.
fn read_index(max: usize) -> usize {
    loop {
        let input = read_line("> ");
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= max => return n - 1,
            _ => println!("Please enter a number between 1 and {}", max),
        }
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        // EOF: treat a closed stdin as a request to quit
        Ok(0) | Err(_) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}
