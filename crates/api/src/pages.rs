//! Server-rendered HTML for the landing and reports pages.
//!
//! Plain string building; every interpolated value goes through [`escape`].

use std::fmt::Write;

use shinobi_core::export::format_reward;
use shinobi_db::models::assignment::AssignmentDetail;
use shinobi_db::models::mission::Mission;
use shinobi_db::models::ninja::NinjaWithVillage;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;}\
table{border-collapse:collapse;margin-bottom:2rem;}\
th,td{border:1px solid #ccc;padding:.3rem .6rem;text-align:left;}\
th{background:#f4f4f4;}";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

/// Landing page with links to the API and the reports page.
pub fn render_index() -> String {
    let body = "<h1>Shinobi Mission Registry</h1>\n\
        <ul>\n\
        <li><a href=\"/reports\">Reports</a></li>\n\
        <li><a href=\"/api/ninjas\">Ninjas (JSON)</a></li>\n\
        <li><a href=\"/api/missions\">Missions (JSON)</a></li>\n\
        <li><a href=\"/api/assignments\">Assignments (JSON)</a></li>\n\
        <li><a href=\"/api/export/csv\">Export CSV</a></li>\n\
        <li><a href=\"/api/export/json\">Export JSON</a></li>\n\
        </ul>\n";
    layout("Shinobi Mission Registry", body)
}

/// Tabular report of every ninja, mission, and assignment.
pub fn render_reports(
    ninjas: &[NinjaWithVillage],
    missions: &[Mission],
    assignments: &[AssignmentDetail],
) -> String {
    let mut body = String::from("<h1>Reports</h1>\n<p><a href=\"/\">Home</a></p>\n");

    body.push_str("<h2>Ninjas</h2>\n");
    if ninjas.is_empty() {
        body.push_str("<p>No ninjas registered.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Name</th><th>Rank</th><th>Village</th>\
             <th>Attack</th><th>Defense</th><th>Chakra</th></tr>\n",
        );
        for n in ninjas {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                n.id,
                escape(&n.name),
                escape(&n.rank),
                escape(&n.village),
                n.attack,
                n.defense,
                n.chakra
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Missions</h2>\n");
    if missions.is_empty() {
        body.push_str("<p>No missions registered.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Name</th><th>Rank</th><th>Reward</th>\
             <th>Minimum rank</th></tr>\n",
        );
        for m in missions {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                m.id,
                escape(&m.name),
                escape(&m.rank),
                format_reward(m.reward),
                escape(&m.minimum_rank)
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Assignments</h2>\n");
    if assignments.is_empty() {
        body.push_str("<p>No assignments yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Ninja</th><th>Mission</th><th>Status</th></tr>\n",
        );
        for a in assignments {
            let status = if a.completed { "Completed" } else { "In progress" };
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{status}</td></tr>",
                a.id,
                escape(&a.ninja),
                escape(&a.mission)
            );
        }
        body.push_str("</table>\n");
    }

    layout("Reports", &body)
}
