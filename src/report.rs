//! Console rendering of prediction results (CLI output).

use std::fmt::Write;

use crate::scoring::{MultiQueryResponse, QueryResult};

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

/// Formats a response as a human-readable report.
pub fn render(response: &MultiQueryResponse, verbose: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "MULTI-QUERY RELEVANCY SEARCH RESULTS");
    let _ = writeln!(out, "{RULE}");

    if response.is_multi_query {
        let _ = writeln!(out, "\nOriginal query: {}", truncated(&response.original_query, 100));
        let _ = writeln!(out, "Detected {} individual queries", response.query_count);

        for result in &response.results {
            let _ = writeln!(out, "\n{THIN_RULE}");
            let _ = writeln!(out, "Query {}: {}", result.query_number, result.query);
            let _ = writeln!(out, "{THIN_RULE}");
            render_result(&mut out, result, verbose);
        }

        let summary = &response.summary;
        let _ = writeln!(out, "\n{RULE}");
        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Total queries:     {}", summary.total_queries);
        let _ = writeln!(out, "Relevant matches:  {}", summary.relevant_matches);
        let _ = writeln!(out, "Success rate:      {:.1}%", summary.success_rate * 100.0);
        let _ = writeln!(out, "Average relevancy: {:.3}", summary.average_relevancy);
    } else if let Some(result) = response.results.first() {
        let _ = writeln!(out, "\nQuery: {}", result.query);
        render_result(&mut out, result, verbose);
    }

    let _ = writeln!(out, "{RULE}");
    out
}

fn render_result(out: &mut String, result: &QueryResult, verbose: bool) {
    if let Some(category) = &result.detected_category {
        let _ = writeln!(out, "Category: {category}");
    }

    if let Some(error) = &result.error {
        let _ = writeln!(out, "\nERROR: {error}");
        return;
    }

    let best = &result.best_match;
    if best.title.is_empty() {
        let _ = writeln!(out, "\nNO MATCH FOUND");
        return;
    }

    let _ = writeln!(out, "\nBEST MATCH:");
    let _ = writeln!(out, "  Product code: {}", or_na(&best.product_code));
    let _ = writeln!(out, "  Title:        {}", best.title);
    let _ = writeln!(out, "  Category:     {}", or_na(&best.category));
    let _ = writeln!(out, "  Type:         {}", or_na(&best.item_type));
    let _ = writeln!(out, "  Relevancy:    {:.3}", result.relevancy_score);
    let _ = writeln!(out, "  Relevant:     {}", result.relevant);

    if verbose {
        if !best.specification.is_empty() {
            let _ = writeln!(out, "  Specification: {}", truncated(&best.specification, 200));
        }

        if result.top_matches.len() > 1 {
            let _ = writeln!(out, "\n  Other top matches:");
            for (i, m) in result.top_matches.iter().enumerate().skip(1).take(3) {
                let _ = writeln!(
                    out,
                    "    {}. {} (relevancy: {:.3})",
                    i + 1,
                    m.title,
                    m.relevancy
                );
            }
        }
    }
}

fn or_na(s: &str) -> &str {
    if s.is_empty() { "N/A" } else { s }
}

fn truncated(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
