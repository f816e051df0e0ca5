//! Interactive query loop.

use exohab_common::{LookupConfig, Result};
use exohab_ranker::ScoreBreakdown;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::lookup::{LookupService, PlanetScores};

const PROMPT: &str = "\nEnter a planet name (or 'exit' to quit): ";
const INVALID_INPUT: &str = "Input was not valid UTF-8, please try again.\n";

/// Counters for one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub found: usize,
    pub not_found: usize,
}

/// Read names until an exit command or end of input.
/// Unknown names and undecodable lines are reported and the loop continues;
/// any other error ends it.
pub async fn run<R, W>(
    service: &LookupService,
    config: &LookupConfig,
    mut reader: R,
    mut writer: W,
) -> Result<SessionStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = SessionStats::default();
    let mut buf = Vec::new();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            debug!("Input closed");
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(bytes = buf.len(), "Ignoring input line that is not valid UTF-8");
            writer.write_all(INVALID_INPUT.as_bytes()).await?;
            continue;
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if config.is_exit_command(query) {
            break;
        }

        match service.lookup(query) {
            Ok(scores) => {
                stats.found += 1;
                writer
                    .write_all(render_scores(&scores, config.show_breakdown).as_bytes())
                    .await?;
            }
            Err(e) if e.is_recoverable() => {
                stats.not_found += 1;
                debug!("{e}");
                writer
                    .write_all(format!("Planet '{query}' not found in the dataset.\n").as_bytes())
                    .await?;
            }
            Err(e) => return Err(e),
        }
    }

    writer.write_all(b"Goodbye.\n").await?;
    writer.flush().await?;
    Ok(stats)
}

pub fn render_scores(scores: &PlanetScores, show_breakdown: bool) -> String {
    let mut out = format!(
        "\n{}\n  ML habitability score:    {:>6.2}%\n  Rule habitability score:  {:>6.2}%\n  Terraformability score:   {:>6.2}%\n",
        scores.name, scores.ml_habitability, scores.rule_habitability, scores.terraformability
    );
    if show_breakdown {
        out.push_str(&render_breakdown(&scores.breakdown));
    }
    out
}

fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    match (breakdown.habitability, breakdown.terraform) {
        (Some(h), Some(t)) => format!(
            "    habitability:  mass {:.2} | temperature {:.2} | star {:.2} | stability {:.2}\n    terraform:     gravity {:.2} | temperature {:.2} | atmosphere {:.2} | water {:.2}\n",
            h.mass, h.temperature, h.star, h.stability, t.gravity, t.temperature, t.atmosphere, t.water
        ),
        _ => "    gas giant (radius > 3 Earth radii): excluded from rule scores\n".to_string(),
    }
}
