use anyhow::{bail, Context, Result};
use authorcheck_lib::api::{detect_text, preprocess_file, DetectRequest, DetectResponse};
use authorcheck_lib::models::{FeatureFlag, Verdict};
use authorcheck_lib::services::config_store::{AppConfig, ConfigStore, OutputFormat};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing::{error, info};

const USAGE: &str = "Usage:\n  authorcheck [FILES...] [--text <text>] [--sensitivity <0.5-1.0>] [--json] [--normalize] [--out <path>] [--config <dir>]\n\nNotes:\n  - 未指定檔案或 --text 時從 stdin 讀取 / reads stdin when no file or --text is given.\n  - Supported files: .txt .md .docx .pdf\n  - 靈敏度越高，對 AI 文本越敏感 / higher sensitivity leans toward AI.";

const BAR_WIDTH: usize = 30;

#[derive(Debug, Default)]
struct CliArgs {
    files: Vec<PathBuf>,
    text: Option<String>,
    sensitivity: Option<f64>,
    json: bool,
    normalize: bool,
    out: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--json" => parsed.json = true,
            "--normalize" => parsed.normalize = true,
            "--text" => parsed.text = Some(next_value(&mut iter, arg)?),
            "--out" => parsed.out = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            "--config" => parsed.config_dir = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            "--sensitivity" => {
                let raw = next_value(&mut iter, arg)?;
                let value: f64 = raw
                    .parse()
                    .with_context(|| format!("invalid --sensitivity value: {}", raw))?;
                parsed.sensitivity = Some(value);
            }
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            path => parsed.files.push(PathBuf::from(path)),
        }
    }
    Ok(parsed)
}

fn next_value<'a>(iter: &mut impl Iterator<Item = &'a String>, key: &str) -> Result<String> {
    iter.next()
        .cloned()
        .with_context(|| format!("{} requires a value", key))
}

enum Source {
    Inline(String),
    File(PathBuf),
    Stdin(String),
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Inline(_) => "--text".to_string(),
            Source::File(p) => p.display().to_string(),
            Source::Stdin(_) => "stdin".to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportEntry {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<DetectResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn load_text(source: Source) -> Result<String> {
    match source {
        Source::Inline(text) | Source::Stdin(text) => Ok(text),
        Source::File(path) => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("read file failed: {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            // PDF/DOCX extraction is CPU-bound
            let text = tokio::task::spawn_blocking(move || preprocess_file(&file_name, &bytes))
                .await
                .context("extraction task failed")??;
            Ok(text)
        }
    }
}

async fn run_one(source: Source, config: AppConfig, sensitivity: f64, normalize: bool) -> ReportEntry {
    let input = source.label();
    let outcome = async {
        let text = load_text(source).await?;
        let request = DetectRequest {
            text,
            sensitivity,
            normalize,
        };
        let response = tokio::task::spawn_blocking(move || detect_text(&request, &config.detection))
            .await
            .context("analysis task failed")??;
        Ok::<_, anyhow::Error>(response)
    }
    .await;

    match outcome {
        Ok(result) => ReportEntry {
            input,
            result: Some(result),
            error: None,
        },
        Err(e) => {
            error!(input = %input, error = %e, "input.failed");
            ReportEntry {
                input,
                result: None,
                error: Some(format!("{:#}", e)),
            }
        }
    }
}

fn progress_bar(p: f64, width: usize) -> String {
    let filled = ((p.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_flags(out: &mut String, title: &str, flags: &[FeatureFlag]) {
    out.push_str(title);
    out.push('\n');
    for flag in flags {
        let mark = if flag.active { "✅" } else { "❌" };
        out.push_str(&format!("  {} {}\n", mark, flag.name));
    }
}

fn render_text(entry: &ReportEntry) -> String {
    let mut out = format!("== {} ==\n", entry.input);
    let Some(resp) = &entry.result else {
        out.push_str(&format!("❌ {}\n", entry.error.as_deref().unwrap_or("unknown error")));
        return out;
    };

    out.push_str(&format!(
        "字元/Chars: {}  詞數/Words: {}  靈敏度/Sensitivity: {:.2}\n",
        resp.stats.chars, resp.stats.words, resp.sensitivity
    ));
    out.push_str(&format!("🤖 AI 生成:   {:.1}%\n", resp.ai_percent));
    out.push_str(&format!("👤 人類撰寫:  {:.1}%\n", resp.human_percent));
    out.push_str(&format!(
        "AI 可能性 {} {:.1}%\n\n",
        progress_bar(resp.analysis.scores.ai_probability, BAR_WIDTH),
        resp.ai_percent
    ));

    render_flags(&mut out, "AI 特徵 / AI features", &resp.analysis.ai_features);
    render_flags(&mut out, "人類特徵 / Human features", &resp.analysis.human_features);

    let icon = match resp.verdict {
        Verdict::LikelyAi => "⚠️",
        Verdict::PossiblyAiAssisted => "🤔",
        Verdict::LikelyHuman => "✅",
    };
    out.push_str(&format!(
        "\n💡 {} {}\n   {}\n",
        icon,
        resp.verdict.headline(),
        resp.verdict.explanation()
    ));
    out
}

fn load_config(dir: Option<PathBuf>) -> Result<AppConfig> {
    let Some(dir) = dir.or_else(ConfigStore::default_config_dir) else {
        return Ok(AppConfig::default());
    };
    let store = ConfigStore::new(dir);
    store
        .load()
        .with_context(|| format!("load config failed: {}", store.config_file().display()))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    authorcheck_lib::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(cli.config_dir.clone())?;
    let sensitivity = cli.sensitivity.unwrap_or(config.detection.sensitivity);
    let normalize = cli.normalize || config.detection.normalize_punctuation;
    let json = cli.json || config.output.format == OutputFormat::Json;

    let mut sources: Vec<Source> = Vec::new();
    if let Some(text) = cli.text {
        sources.push(Source::Inline(text));
    }
    sources.extend(cli.files.into_iter().map(Source::File));
    if sources.is_empty() {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("read stdin failed")?;
        sources.push(Source::Stdin(buf));
    }

    info!(inputs = sources.len(), sensitivity, normalize, "run.start");

    // Inputs are independent; analyse them concurrently and report in input order.
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| tokio::spawn(run_one(source, config.clone(), sensitivity, normalize)))
        .collect();
    let mut entries = Vec::with_capacity(handles.len());
    for handle in handles {
        entries.push(handle.await.context("input task panicked")?);
    }

    let rendered = if json {
        serde_json::to_string_pretty(&entries)?
    } else {
        entries.iter().map(render_text).collect::<Vec<_>>().join("\n")
    };

    match &cli.out {
        Some(path) => {
            tokio::fs::write(path, &rendered)
                .await
                .with_context(|| format!("write out failed: {}", path.display()))?;
            println!("Wrote report: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    info!(inputs = entries.len(), failed, "run.finished");
    Ok(if failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

#[cfg(test)]
mod tests {
    use super::*;
    use authorcheck_lib::services::config_store::DetectionConfig;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(&args(&[
            "a.txt",
            "--sensitivity",
            "0.9",
            "--json",
            "b.docx",
            "--out",
            "report.json",
        ]))
        .unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.docx")]);
        assert_eq!(cli.sensitivity, Some(0.9));
        assert!(cli.json);
        assert_eq!(cli.out, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--sensitivity"])).is_err());
        assert!(parse_args(&args(&["--sensitivity", "high"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(progress_bar(0.5, 4), "[██░░]");
        assert_eq!(progress_bar(1.0, 4), "[████]");
    }

    #[test]
    fn test_render_text_lists_flags_and_verdict() {
        let text = "I think it's wonderful, you know, I really love it! Basically amazing.";
        let resp = detect_text(&DetectRequest::new(text, 0.8), &DetectionConfig::default()).unwrap();
        let entry = ReportEntry {
            input: "sample".to_string(),
            result: Some(resp),
            error: None,
        };
        let out = render_text(&entry);
        assert!(out.starts_with("== sample =="));
        assert!(out.contains("✅ 情感表現/Emotional"));
        assert!(out.contains("❌ 重複短語多/Repetition"));
        assert!(out.contains("Likely human-written"));
        let ai_pos = out.find("重複短語多").unwrap();
        let human_pos = out.find("使用縮寫").unwrap();
        assert!(ai_pos < human_pos);
    }

    #[test]
    fn test_render_text_error_entry() {
        let entry = ReportEntry {
            input: "short.txt".to_string(),
            result: None,
            error: Some("Text too short".to_string()),
        };
        assert!(render_text(&entry).contains("❌ Text too short"));
    }

    #[tokio::test]
    async fn test_run_one_reports_short_input() {
        let entry = run_one(Source::Inline("tiny".to_string()), AppConfig::default(), 0.75, false).await;
        assert!(entry.result.is_none());
        assert!(entry.error.unwrap().contains("Text too short"));
    }
}
