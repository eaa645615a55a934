use anyhow::{Context, Result};
use clap::Parser;
use speech_session::{
    CapabilityDetector, EngineEvent, Hypothesis, RecognitionEvent, ScriptedEngine, SessionConfig,
    SessionController,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "speech-session")]
#[command(about = "Run a scripted transcript session end to end")]
struct Args {
    /// BCP 47 language tag for recognition
    #[arg(short, long, default_value = "ko-KR")]
    language: String,

    /// Keep the session open until explicitly stopped
    #[arg(short, long)]
    continuous: bool,

    /// Discard provisional results instead of surfacing them
    #[arg(long)]
    no_interim: bool,

    /// Config file overriding the flags above
    #[arg(long)]
    config: Option<String>,
}

/// Canned utterance delivered the way a live engine would: a revisable
/// prefix first, then the finalized segment, then the next utterance
/// building on the full resent list.
fn demo_script() -> Vec<EngineEvent> {
    let greeting_final = Hypothesis {
        text: "안녕하세요".to_string(),
        is_final: true,
    };

    vec![
        EngineEvent::Result(RecognitionEvent {
            start_index: 0,
            segments: vec![Hypothesis {
                text: "안녕하".to_string(),
                is_final: false,
            }],
        }),
        EngineEvent::Result(RecognitionEvent {
            start_index: 0,
            segments: vec![greeting_final.clone()],
        }),
        EngineEvent::Result(RecognitionEvent {
            start_index: 1,
            segments: vec![
                greeting_final.clone(),
                Hypothesis {
                    text: "반갑".to_string(),
                    is_final: false,
                },
            ],
        }),
        EngineEvent::Result(RecognitionEvent {
            start_index: 1,
            segments: vec![
                greeting_final,
                Hypothesis {
                    text: "반갑습니다".to_string(),
                    is_final: true,
                },
            ],
        }),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load session config from {path}"))?,
        None => SessionConfig {
            continuous: args.continuous,
            interim_results: !args.no_interim,
            language: args.language.clone(),
        },
    };

    info!("Transcript session demo");
    info!("Language: {}", config.language);
    info!("Continuous: {}", config.continuous);
    info!("Interim results: {}", config.interim_results);

    let continuous = config.continuous;
    let engine = ScriptedEngine::new(demo_script());
    let detector = CapabilityDetector::always_supported();
    let mut session = SessionController::new(Box::new(engine), &detector, config);

    session.start_listening().await;

    if continuous {
        // Fold in what the engine delivered so far, then ask it to wrap up
        session.poll_events();
        session.stop_listening().await;
    }

    session.process_events().await;

    if let Some(error) = session.error() {
        info!("Session error: {error}");
    }

    info!("Transcript: {}", session.transcript());

    let stats = session.stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
