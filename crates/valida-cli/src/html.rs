//! Standalone HTML results page.
//!
//! The page carries its own styles and scripts: index cards, a competitor
//! search box, one section per category and a category picker for printing.

use std::fmt::Write;

use chrono::{DateTime, Local};
use valida_core::{BestTime, ReportCategory, ReportModel, ReportRow, ReportTable};

use crate::Config;

const STYLE: &str = include_str!("assets/report.css");
const SCRIPT: &str = include_str!("assets/report.js");

/// Escapes text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full results page.
pub fn render(model: &ReportModel, config: &Config, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    let title = escape(&config.title);

    writeln!(out, "<!DOCTYPE html>").unwrap();
    writeln!(out, "<html lang=\"es\">").unwrap();
    writeln!(out, "<head>").unwrap();
    writeln!(out, "<meta charset=\"UTF-8\">").unwrap();
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )
    .unwrap();
    writeln!(out, "<title>{title}</title>").unwrap();
    writeln!(out, "<style>\n{STYLE}</style>").unwrap();
    writeln!(out, "</head>").unwrap();
    writeln!(out, "<body>").unwrap();
    writeln!(out, "<div id=\"menu-container\"></div>").unwrap();
    writeln!(out, "<div id=\"contenido-exportar\" class=\"container\">").unwrap();

    writeln!(out, "<header>").unwrap();
    writeln!(out, "<h1>{title}</h1>").unwrap();
    if !config.subtitle.is_empty() {
        writeln!(out, "<p>{}</p>", escape(&config.subtitle)).unwrap();
    }
    writeln!(out, "</header>").unwrap();

    writeln!(out, "<div class=\"toolbar\">").unwrap();
    writeln!(
        out,
        "<input type=\"text\" id=\"buscador\" class=\"search-box\" placeholder=\"Buscar por nombre o N° del piloto...\" />"
    )
    .unwrap();
    writeln!(out, "</div>").unwrap();

    writeln!(out, "<nav class=\"index-cards\">").unwrap();
    for category in &model.categories {
        writeln!(
            out,
            "<a href=\"#{id}\" class=\"index-card\" data-categoria-id=\"{id}\">{label}</a>",
            id = escape(&category.id),
            label = escape(&category.label),
        )
        .unwrap();
    }
    writeln!(out, "</nav>").unwrap();

    writeln!(out, "<main class=\"content-section\">").unwrap();
    if model.is_empty() {
        writeln!(out, "<p class=\"empty\">No hay resultados.</p>").unwrap();
    }
    for category in &model.categories {
        render_category(&mut out, category);
    }
    writeln!(out, "</main>").unwrap();

    writeln!(out, "<div class=\"pdf-section\">").unwrap();
    writeln!(
        out,
        "<button type=\"button\" id=\"descargarPDF\" class=\"btn-pdf\">Exportar a PDF</button>"
    )
    .unwrap();
    writeln!(
        out,
        "<p class=\"pdf-hint\">En el diálogo de impresión, elige \"Guardar como PDF\" como destino.</p>"
    )
    .unwrap();
    writeln!(out, "</div>").unwrap();
    writeln!(
        out,
        "<footer class=\"generated\">Generado el {}</footer>",
        generated_at.format("%Y-%m-%d %H:%M")
    )
    .unwrap();
    writeln!(out, "</div>").unwrap();

    render_export_modal(&mut out, model);

    if let Some(prefix) = &config.asset_prefix {
        writeln!(
            out,
            "<script src=\"{}load-menu.js\"></script>",
            escape(prefix)
        )
        .unwrap();
    }
    writeln!(out, "<script>\n{SCRIPT}</script>").unwrap();
    writeln!(out, "</body>").unwrap();
    writeln!(out, "</html>").unwrap();
    out
}

fn render_category(out: &mut String, category: &ReportCategory) {
    let id = escape(&category.id);
    writeln!(
        out,
        "<section class=\"categoria-section\" id=\"{id}\" data-categoria-id=\"{id}\">"
    )
    .unwrap();
    writeln!(out, "<div class=\"categoria-header\">").unwrap();
    writeln!(out, "<h2>{}</h2>", escape(&category.label)).unwrap();
    writeln!(
        out,
        "<button type=\"button\" class=\"btn-top\" title=\"Ir al inicio\" aria-label=\"Ir al inicio\">&#8593;</button>"
    )
    .unwrap();
    writeln!(out, "</div>").unwrap();

    if category.has_best_times() {
        writeln!(out, "<div class=\"times-summary\">").unwrap();
        writeln!(out, "<h4>Mejores tiempos</h4>").unwrap();
        if let Some(best) = &category.best_qualifying {
            writeln!(
                out,
                "<p><strong>Mejor tiempo Clasificatoria:</strong> {}</p>",
                best_time_text(best, false)
            )
            .unwrap();
        }
        if let Some(best) = &category.best_race {
            writeln!(
                out,
                "<p><strong>Mejor tiempo Carrera:</strong> {}</p>",
                best_time_text(best, true)
            )
            .unwrap();
        }
        writeln!(out, "</div>").unwrap();
    }

    writeln!(out, "<div class=\"final-block\">").unwrap();
    writeln!(out, "<h3>{}</h3>", escape(&category.primary.title)).unwrap();
    render_table(out, &category.primary);
    writeln!(out, "</div>").unwrap();

    if !category.breakdown.is_empty() {
        writeln!(out, "<div class=\"desglose-block\">").unwrap();
        writeln!(out, "<h3>Desglose por sesión</h3>").unwrap();
        for table in &category.breakdown {
            writeln!(out, "<h4>{}</h4>", escape(&table.title)).unwrap();
            render_table(out, table);
        }
        writeln!(out, "</div>").unwrap();
    }

    writeln!(out, "</section>").unwrap();
}

fn best_time_text(best: &BestTime, with_session: bool) -> String {
    let session = if with_session {
        format!(" ({})", escape(best.session.label()))
    } else {
        String::new()
    };
    format!(
        "{}{session} - N° {} {}",
        best.time,
        escape(&best.number),
        escape(&best.name)
    )
}

fn render_table(out: &mut String, table: &ReportTable) {
    writeln!(out, "<div class=\"table-wrapper\"><table>").unwrap();
    write!(out, "<thead><tr>").unwrap();
    for header in &table.headers {
        write!(out, "<th>{}</th>", escape(header)).unwrap();
    }
    writeln!(out, "</tr></thead>").unwrap();
    writeln!(out, "<tbody>").unwrap();
    for row in &table.rows {
        render_row(out, row);
    }
    writeln!(out, "</tbody>").unwrap();
    writeln!(out, "</table></div>").unwrap();
}

fn render_row(out: &mut String, row: &ReportRow) {
    let class = row
        .podium
        .map(|place| format!(" class=\"pos-{place}\""))
        .unwrap_or_default();
    write!(
        out,
        "<tr{class} data-numero=\"{}\" data-nombre=\"{}\">",
        escape(&row.number),
        escape(&row.name)
    )
    .unwrap();
    for (idx, cell) in row.cells.iter().enumerate() {
        write!(out, "<td>{}", escape(cell)).unwrap();
        let note = if idx == 0 { row.annotation.as_deref() } else { None };
        if let Some(note) = note {
            write!(
                out,
                "<span class=\"comentario-icon\" title=\"{}\" aria-label=\"Comentario\">&#9432;</span>",
                escape(note)
            )
            .unwrap();
        }
        write!(out, "</td>").unwrap();
    }
    writeln!(out, "</tr>").unwrap();
}

fn render_export_modal(out: &mut String, model: &ReportModel) {
    writeln!(out, "<div id=\"modalExportar\" class=\"modal-overlay\">").unwrap();
    writeln!(out, "<div class=\"modal-box\">").unwrap();
    writeln!(out, "<h3>Categorías a exportar</h3>").unwrap();
    writeln!(out, "<div class=\"modal-categorias\" id=\"modalCategorias\">").unwrap();
    for category in &model.categories {
        writeln!(
            out,
            "<label class=\"modal-cat-item\"><input type=\"checkbox\" value=\"{}\" checked> {}</label>",
            escape(&category.id),
            escape(&category.label)
        )
        .unwrap();
    }
    writeln!(out, "</div>").unwrap();
    writeln!(out, "<div class=\"modal-actions\">").unwrap();
    writeln!(
        out,
        "<button type=\"button\" class=\"modal-btn modal-btn-link\" id=\"modalSelectAll\">Seleccionar todo</button>"
    )
    .unwrap();
    writeln!(
        out,
        "<button type=\"button\" class=\"modal-btn modal-btn-link\" id=\"modalDeselectAll\">Deseleccionar todo</button>"
    )
    .unwrap();
    writeln!(out, "</div>").unwrap();
    writeln!(out, "<div class=\"modal-actions\">").unwrap();
    writeln!(
        out,
        "<button type=\"button\" class=\"modal-btn modal-btn-primary\" id=\"modalExportarBtn\">Exportar</button>"
    )
    .unwrap();
    writeln!(
        out,
        "<button type=\"button\" class=\"modal-btn modal-btn-secondary\" id=\"modalCancelar\">Cancelar</button>"
    )
    .unwrap();
    writeln!(out, "</div>").unwrap();
    writeln!(out, "</div>").unwrap();
    writeln!(out, "</div>").unwrap();
}
