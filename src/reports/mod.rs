use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;
use teamscore::coaching::coaching_note;
use teamscore::config::ReportOptions;
use teamscore::scorer::{Dimension, FlagLevel, ScoreResult};

fn flag_cell(level: Option<FlagLevel>) -> Cell {
    match level {
        Some(FlagLevel::NeedsTraining) => Cell::new("treinamento").fg(Color::Red),
        Some(FlagLevel::NeedsAttention) => Cell::new("atenção").fg(Color::Yellow),
        None => Cell::new("ok").fg(Color::Green),
    }
}

pub fn print_score_table(results: &[ScoreResult], opts: &ReportOptions) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Colaborador").add_attribute(Attribute::Bold),
        Cell::new("Prod"),
        Cell::new("Efic"),
        Cell::new("Qual"),
        Cell::new("Geral").fg(Color::Cyan),
    ];
    for dim in Dimension::iter() {
        header.push(Cell::new(dim.label()));
    }
    table.add_row(header);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let prec = opts.display_decimals;
    for r in results {
        let mut row = vec![Cell::new(&r.employee_name).add_attribute(Attribute::Bold)];
        for dim in Dimension::iter() {
            row.push(Cell::new(format!("{:.*}", prec, r.sub_score(dim))));
        }
        row.push(
            Cell::new(format!("{:.*}", prec, r.overall))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        );
        for dim in Dimension::iter() {
            row.push(flag_cell(r.flag_for(dim)));
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_team_summary(results: &[ScoreResult], opts: &ReportOptions) {
    if results.is_empty() {
        return;
    }
    let n = results.len() as f64;
    let mut sums = [0.0f64; 4];
    for r in results {
        for (acc, v) in sums.iter_mut().zip(r.radar_values()) {
            *acc += v;
        }
    }

    let best = results
        .iter()
        .max_by(|a, b| a.overall.total_cmp(&b.overall))
        .map(|r| r.employee_name.as_str())
        .unwrap_or("-");
    let flagged = results.iter().filter(|r| !r.flags.is_empty()).count();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Média da equipe").add_attribute(Attribute::Bold),
        Cell::new("Prod"),
        Cell::new("Efic"),
        Cell::new("Qual"),
        Cell::new("Geral").fg(Color::Cyan),
        Cell::new("Destaque"),
        Cell::new("Com alertas"),
    ]);

    let prec = opts.display_decimals;
    table.add_row(vec![
        Cell::new(format!("{} colaboradores", results.len())),
        Cell::new(format!("{:.*}", prec, sums[0] / n)),
        Cell::new(format!("{:.*}", prec, sums[1] / n)),
        Cell::new(format!("{:.*}", prec, sums[2] / n)),
        Cell::new(format!("{:.*}", prec, sums[3] / n)).fg(Color::Cyan),
        Cell::new(best).fg(Color::Green),
        Cell::new(flagged.to_string()),
    ]);
    println!("\n{}", table);
}

pub fn print_coaching_notes(results: &[ScoreResult]) {
    println!("\n📝 Observações");
    for r in results {
        println!("  - {}", coaching_note(r));
    }
}
