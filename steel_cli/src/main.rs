//! # SteelSpan CLI Application
//!
//! Terminal interface for the steel beam and connection engine.
//!
//! Two modes:
//! - Interactive (default): prompt for section/span/method, print the
//!   capacity summary, then size a shear tab for a fraction of the
//!   design shear.
//! - `--table`: print the batch safe-load table for the whole built-in
//!   catalog at a prompted span.

use std::io::{self, BufRead, Write};

use steel_core::calculations::beam_capacity::{calculate, BeamCapacityInput};
use steel_core::calculations::connection_solver::{solve, ConnectionDesignInput};
use steel_core::design::DesignMethod;
use steel_core::materials::{builtin_catalog, complete, BoltGrade, SteelGrade};
use steel_core::tables::{capacity_table, CapacityTableRequest};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("SteelSpan CLI - Steel Beam & Connection Designer");
    println!("================================================");
    println!();

    if std::env::args().any(|a| a == "--table") {
        run_table();
        return;
    }

    let section_name = prompt_string("Section [H-300x150x6.5x9]: ", "H-300x150x6.5x9");
    let span_m = prompt_f64("Span (m) [6.0]: ", 6.0);
    let method_str = prompt_string("Method ASD/LRFD [ASD]: ", "ASD");
    let method = if method_str.eq_ignore_ascii_case("lrfd") {
        DesignMethod::Lrfd
    } else {
        DesignMethod::Asd
    };

    let raw = match builtin_catalog().lookup(&section_name) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let section = match complete(raw) {
        Ok(section) => section,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let beam = BeamCapacityInput::new("CLI-Demo", span_m, section.clone(), SteelGrade::Ss400, method);

    let result = match calculate(&beam) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return;
        }
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM CAPACITY RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Section:  {} ({})", section.name, method);
    println!("  Span:     {:.2} m (unbraced)", span_m);
    println!("  Fy:       {:.0} ksc", beam.fy_ksc);
    println!();
    println!("LTB:");
    println!("  Lp = {:.2} m, Lr = {:.2} m -> {}", result.lp_m, result.lr_m, result.zone);
    println!("  Mn = {:.0} kgf.m (Mp = {:.0} kgf.m)", result.mn_kgfm, result.mp_kgfm);
    println!();
    println!("Design strengths:");
    println!("  V = {:.0} kgf, M = {:.0} kgf.m", result.v_design_kgf, result.m_design_kgfm);
    println!();
    println!("Uniform-load capacities:");
    println!("  shear      {:.0} kgf/m", result.ws_kgf_m);
    println!("  moment     {:.0} kgf/m", result.wm_kgf_m);
    println!("  deflection {:.0} kgf/m", result.wd_kgf_m);
    println!("  crossovers: L_vm = {:.2} m, L_md = {:.2} m", result.l_vm_m, result.l_md_m);
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  SAFE LOAD: {:.0} kgf/m net (governs: {})",
        result.w_net_kgf_m, result.governing
    );
    println!("═══════════════════════════════════════");

    // Shear-tab design for a share of the beam's design shear
    let fraction = prompt_f64("\nConnection demand as fraction of V_design [0.5]: ", 0.5);
    let demand = result.v_design_kgf * fraction;

    let connection = ConnectionDesignInput {
        label: "CLI-Demo".to_string(),
        demand_kgf: demand,
        section,
        method,
        bolt_grade: BoltGrade::A325N,
        beam_grade: SteelGrade::Ss400,
        plate_grade: SteelGrade::Ss400,
    };

    match solve(&connection) {
        Ok(solution) => {
            println!();
            println!("Shear tab for V = {:.0} kgf [{}]", demand, solution.status);
            println!(
                "  {} bolts M{:.0} ({}) @ {:.0} mm pitch",
                solution.geometry.rows,
                solution.geometry.bolt_dia_mm,
                solution.geometry.bolt_grade,
                solution.geometry.pitch_mm,
            );
            println!(
                "  plate PL{:.0}x{:.0} mm, weld {:.0} mm",
                solution.geometry.plate_thickness_mm,
                solution.geometry.plate_height_mm,
                solution.geometry.weld_size_mm,
            );
            println!();
            for check in &solution.result.checks {
                println!(
                    "  {:<22} Rn = {:>8.0} kgf  design = {:>8.0} kgf  ratio = {:.2} {}",
                    check.limit_state.to_string(),
                    check.rn_kgf,
                    check.design_kgf,
                    check.ratio,
                    status_icon(check.ratio <= 1.0)
                );
            }
            println!(
                "  Controls: {} (ratio {:.2}, {} candidates tried)",
                solution.result.controlling, solution.ratio, solution.candidates_tried
            );

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&solution) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }
}

fn run_table() {
    let span_m = prompt_f64("Span (m) [6.0]: ", 6.0);
    let request = CapacityTableRequest {
        span_m,
        fy_ksc: SteelGrade::Ss400.fy_ksc(),
        e_gpa: 200.0,
        method: DesignMethod::Asd,
        deflection_limit: 360.0,
    };

    match capacity_table(builtin_catalog(), &request) {
        Ok(rows) => {
            println!();
            println!(
                "{:<20} {:>8} {:>12} {:>12}  {:<10} {}",
                "Section", "kg/m", "w_allow", "w_net", "governs", "zone"
            );
            for row in rows {
                println!(
                    "{:<20} {:>8.1} {:>12.0} {:>12.0}  {:<10} {}",
                    row.section,
                    row.w_kg_m,
                    row.w_allow_kgf_m,
                    row.w_net_kgf_m,
                    row.governing.to_string(),
                    row.zone,
                );
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
