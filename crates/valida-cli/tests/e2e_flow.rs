//! End-to-end tests running the `valida` binary against an event directory.
//!
//! Tests the full pipeline: exports on disk → stats document + HTML page.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn valida_binary() -> String {
    env!("CARGO_BIN_EXE_valida").to_string()
}

/// Runs `valida` with an isolated home so no user config leaks in.
fn run_valida(home: &Path, args: &[&str]) -> Output {
    Command::new(valida_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("VALIDA_DISCIPLINE")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run valida")
}

fn write_event(event_dir: &Path) {
    let exports = event_dir.join("FILES EXPORTED");
    std::fs::create_dir_all(&exports).unwrap();
    std::fs::write(
        exports.join("125cc - Final.csv"),
        "\u{feff}Pos,N°,Nombre,Liga,Club,Moto,Clase,Comentario\n\
         1,1,Ana,Antioquia,ClubA,Yamaha,125cc,\n\
         2,2,Luis,VALLE,ClubB,Honda,125cc,Penalizado\n\
         ,,,,,,,\n",
    )
    .unwrap();
    std::fs::write(
        exports.join("125cc - Clasificatoria.csv"),
        "Pos,N°,Nombre,Mejor Tm\n1,1,Ana,1:33.843\n2,2,Luis,1:34.010\n",
    )
    .unwrap();
    std::fs::write(
        exports.join("MX2 - 1 Carrera.csv"),
        "Pos,N°,Nombre,Liga,Club,Moto,Mejor Tiempo\n1,7,Eva,Antioquia,ClubA,KTM,2:01.5\n",
    )
    .unwrap();
    std::fs::write(exports.join("notas.txt"), "not an export").unwrap();
}

#[test]
fn test_build_writes_stats_and_report() {
    let temp = TempDir::new().unwrap();
    let event_dir = temp.path().join("girardota");
    write_event(&event_dir);

    let output = run_valida(temp.path(), &["build", event_dir.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "valida build should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Participations: 3"), "stdout: {stdout}");

    let stats = std::fs::read_to_string(event_dir.join("datos_informe_valida.json")).unwrap();
    let stats: serde_json::Value = serde_json::from_str(&stats).unwrap();
    assert_eq!(stats["participaciones_totales"], 3);
    assert_eq!(stats["pilotos_unicos"], 3);
    assert_eq!(stats["pilotos_por_liga"]["Antioquia"], 2);
    assert_eq!(stats["pilotos_por_liga"]["Valle del Cauca"], 1);
    assert_eq!(stats["participaciones_por_categoria"]["MX2"], 1);

    let page = std::fs::read_to_string(event_dir.join("resultados.html")).unwrap();
    assert!(page.contains("id=\"125cc-final\""));
    assert!(page.contains("id=\"mx2-carrera-1\""));
    assert!(page.contains("1:33.843 - N° 1 Ana"));
    assert!(page.contains("title=\"Penalizado\""));
    assert!(!page.contains("<th>Clase</th>"));
}

#[test]
fn test_stats_stdout_respects_event_config() {
    let temp = TempDir::new().unwrap();
    let event_dir = temp.path().join("evento");
    write_event(&event_dir);
    std::fs::write(
        event_dir.join("valida.toml"),
        "[brand_aliases]\n\"KTM\" = \"KTM Sportmotorcycle\"\n",
    )
    .unwrap();

    let output = run_valida(
        temp.path(),
        &["stats", event_dir.to_str().unwrap(), "--stdout"],
    );
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["inscripciones_por_marca"]["KTM Sportmotorcycle"], 1);
    assert!(!event_dir.join("datos_informe_valida.json").exists());
}

#[test]
fn test_inspect_shows_primary_session() {
    let temp = TempDir::new().unwrap();
    let event_dir = temp.path().join("evento");
    write_event(&event_dir);

    let output = run_valida(
        temp.path(),
        &["inspect", event_dir.to_str().unwrap(), "--discipline", "velotierra"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Discipline: velotierra"));
    assert!(stdout.contains("* Final            125cc - Final.csv (2 rows)"));
}

#[test]
fn test_missing_exports_directory_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_valida(temp.path(), &["render", temp.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load exports"), "stderr: {stderr}");
}

#[test]
fn test_no_command_prints_help() {
    let temp = TempDir::new().unwrap();
    let output = run_valida(temp.path(), &[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}
