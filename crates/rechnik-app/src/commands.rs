use std::path::Path;

use anyhow::{Context, Result};
use rechnik_api::VocabularyClient;
use rechnik_config::Config;
use rechnik_core::language::InflectionAnalyzer;
use rechnik_core::layout::Layout;
use rechnik_core::source::{JsonFileSource, LemmaFile, LemmaSource};
use rechnik_core::state::ViewFilters;
use rechnik_lang_bulgarian::{BulgarianAnalyzer, GrammaticalFeatures};
use rechnik_types::{LemmaDetail, PartOfSpeech};
use serde::Serialize;
use serde_json::json;

use crate::cli::{Cli, Command};
use crate::render;

/// JSON shape of one rendered lemma.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LemmaOutput<'a> {
    pub id: u64,
    pub text: &'a str,
    pub translation: &'a str,
    pub part_of_speech: Option<PartOfSpeech>,
    pub filters: ViewFilters,
    pub layout: Layout<'a>,
}

impl<'a> LemmaOutput<'a> {
    pub fn new(analyzer: &BulgarianAnalyzer, lemma: &'a LemmaDetail, filters: ViewFilters) -> Self {
        Self {
            id: lemma.id,
            text: &lemma.text,
            translation: &lemma.translation,
            part_of_speech: lemma.part_of_speech,
            filters,
            layout: analyzer.layout(&lemma.inflections, lemma.part_of_speech, &filters),
        }
    }
}

pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    let filters = cli.filters(config.view.filters());
    let json = cli.json;

    match cli.command {
        Command::Show { file, pos } => show(&file, pos, filters, json).await,
        Command::Fetch { id } => {
            let client = VocabularyClient::new(&config.api)?;
            let lemma = load(&client, id).await?;
            print_lemmas(&[lemma], filters, json)
        }
        Command::Search { query } => {
            let client = VocabularyClient::new(&config.api)?;
            let hits = client.search(&query).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", render::search_results(&query, &hits));
            }
            Ok(())
        }
        Command::Describe { tag, pos } => {
            describe(&tag, pos, json);
            Ok(())
        }
        Command::Audio { id, generate } => {
            let client = VocabularyClient::new(&config.api)?;
            let lemma = load(&client, id).await?;
            audio(&client, &lemma, filters, generate, json).await
        }
    }
}

async fn load(source: &dyn LemmaSource, id: u64) -> Result<LemmaDetail> {
    let lemma = source
        .lemma(id)
        .await
        .with_context(|| format!("Could not load lemma {id}"))?;
    tracing::info!(
        "Loaded {} ({} inflections)",
        lemma.text,
        lemma.inflections.len()
    );
    Ok(lemma)
}

/// Lemmas in a file. A bare inflection array becomes one lemma named after
/// the file.
pub fn lemmas_from_file(
    file: LemmaFile,
    path: &Path,
    pos: Option<PartOfSpeech>,
) -> Vec<LemmaDetail> {
    let mut lemmas = match file {
        LemmaFile::Records(inflections) => vec![LemmaDetail {
            id: 0,
            text: path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
            translation: String::new(),
            notes: None,
            part_of_speech: None,
            inflections,
        }],
        other => other.into_lemmas(),
    };

    if pos.is_some() {
        for lemma in &mut lemmas {
            lemma.part_of_speech = pos;
        }
    }
    lemmas
}

async fn show(
    path: &Path,
    pos: Option<PartOfSpeech>,
    filters: ViewFilters,
    json: bool,
) -> Result<()> {
    let file = JsonFileSource::new(path)
        .read()
        .await
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let lemmas = lemmas_from_file(file, path, pos);
    if lemmas.is_empty() {
        tracing::warn!("{} contains no lemmas", path.display());
    }
    print_lemmas(&lemmas, filters, json)
}

fn print_lemmas(lemmas: &[LemmaDetail], filters: ViewFilters, json: bool) -> Result<()> {
    let analyzer = BulgarianAnalyzer::new();

    if json {
        let outputs: Vec<LemmaOutput<'_>> = lemmas
            .iter()
            .map(|lemma| LemmaOutput::new(&analyzer, lemma, filters))
            .collect();
        let text = match outputs.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{text}");
        return Ok(());
    }

    let rendered: Vec<String> = lemmas
        .iter()
        .map(|lemma| {
            let layout = analyzer.layout(&lemma.inflections, lemma.part_of_speech, &filters);
            render::lemma(lemma, &layout)
        })
        .collect();
    print!("{}", rendered.join("\n"));
    Ok(())
}

fn describe(tag: &str, pos: Option<PartOfSpeech>, json: bool) {
    let analyzer = BulgarianAnalyzer::new();
    let label = analyzer.describe(Some(tag));
    let features: Vec<GrammaticalFeatures> = analyzer.analyze(Some(tag), pos);

    if json {
        let payload = json!({
            "tag": tag,
            "label": label,
            "partOfSpeech": pos,
            "grammarVersion": analyzer.grammar_version(),
            "features": features,
        });
        println!("{payload:#}");
        return;
    }

    println!("{label}");
    for feature in &features {
        println!("  {feature}");
    }
}

async fn audio(
    client: &VocabularyClient,
    lemma: &LemmaDetail,
    filters: ViewFilters,
    generate: bool,
    json: bool,
) -> Result<()> {
    let analyzer = BulgarianAnalyzer::new();
    let layout = analyzer.layout(&lemma.inflections, lemma.part_of_speech, &filters);

    let mut rows = Vec::new();
    for record in layout.visible_records() {
        let url = if generate {
            Some(client.generate_audio(record.audio_text()).await?)
        } else {
            None
        };
        rows.push((record, url));
    }

    if json {
        let payload: Vec<_> = rows
            .iter()
            .map(|(record, url)| {
                json!({
                    "id": record.id,
                    "form": record.form,
                    "audioText": record.audio_text(),
                    "url": url,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut headers = vec!["FORM".to_string(), "AUDIO TEXT".to_string()];
    if generate {
        headers.push("URL".to_string());
    }
    let table_rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|(record, url)| {
            let mut row = vec![record.form.clone(), record.audio_text().to_string()];
            row.extend(url);
            row
        })
        .collect();
    print!("{}", render::table(&headers, &table_rows));
    Ok(())
}
