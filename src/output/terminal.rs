// Colored terminal rendering of an analysis result.

use colored::Colorize;

use crate::analysis::attribution::Impact;
use crate::analysis::Analysis;
use crate::model::Sentiment;

/// Display one analysis: verdict, confidence, contribution table, word map.
pub fn display_analysis(analysis: &Analysis) {
    println!();
    match analysis.sentiment {
        Sentiment::Positive => {
            println!("  {}", "This review is Positive.".green().bold());
        }
        Sentiment::Negative => {
            println!("  {}", "This review is Negative.".red().bold());
        }
    }

    println!(
        "  {} confidence: {}",
        analysis.model.display_name().bold(),
        format!("{:.1}%", analysis.confidence * 100.0).bold()
    );
    if let Some(p) = analysis.positive_probability {
        println!(
            "  {}",
            format!(
                "P(positive) = {:.3} at threshold {:.2}",
                p, analysis.threshold
            )
            .dimmed()
        );
    }

    if analysis.contributions.is_empty() {
        if let Some(note) = &analysis.attribution_note {
            println!("\n  {}", note.dimmed());
        }
    } else {
        println!("\n  {}", "Key words behind the verdict:".bold());
        println!(
            "  {:<20} {:<10} {:>8}",
            "Word".dimmed(),
            "Impact".dimmed(),
            "Score".dimmed()
        );
        println!("  {}", "-".repeat(40).dimmed());
        for c in &analysis.contributions {
            let impact = match c.impact {
                Impact::Positive => "positive".green(),
                Impact::Negative => "negative".red(),
            };
            println!("  {:<20} {:<10} {:>8.4}", c.word, impact, c.score);
        }
    }

    if !analysis.word_map.is_empty() {
        let preview: Vec<String> = analysis
            .word_map
            .iter()
            .take(8)
            .map(|w| format!("{}({})", w.word, w.count))
            .collect();
        println!("\n  {} {}", "Word map:".bold(), preview.join("  "));
    }

    println!("\n  {}", analysis.log_line.dimmed());
}
