//! Subcommand handlers. Each one drives a [`PersonRepository`] and writes its result to `out`.

use std::io::Write;

use anyhow::Result;
use futures::future;
use futures::StreamExt;
use person_core::Person;
use person_repository::{PersonRepository, PersonStream};

use crate::config::OutputFormat;

/// Writes every person in store order, or only those whose first name matches.
pub async fn handle_list<R, W>(
    repo: &R,
    out: &mut W,
    format: OutputFormat,
    first_name: Option<&str>,
    names_only: bool,
) -> Result<()>
where
    R: PersonRepository + ?Sized,
    W: Write,
{
    let mut people: PersonStream = match first_name {
        Some(name) => {
            let name = name.to_owned();
            repo.find_all()
                .filter(move |person| future::ready(person.first_name() == name))
                .boxed()
        }
        None => repo.find_all(),
    };

    let mut count = 0usize;
    while let Some(person) = people.next().await {
        if names_only {
            write_name(out, person.first_name(), format)?;
        } else {
            write_person(out, &person, format)?;
        }
        count += 1;
    }
    tracing::info!(count, first_name, "Listed persons");

    Ok(())
}

/// Writes the person with `id`. Absent prints `not found` (or `null`); strict absence is an error.
pub async fn handle_get<R, W>(
    repo: &R,
    out: &mut W,
    format: OutputFormat,
    id: i32,
    strict: bool,
) -> Result<()>
where
    R: PersonRepository + ?Sized,
    W: Write,
{
    if strict {
        let person = repo.get_by_id_strict(id).await?;
        return write_person(out, &person, format);
    }

    match repo.get_by_id(id).await {
        Some(person) => write_person(out, &person, format),
        None => {
            tracing::info!(id, "No person with id");
            write_absent(out, format)
        }
    }
}

pub async fn handle_first<R, W>(repo: &R, out: &mut W, format: OutputFormat) -> Result<()>
where
    R: PersonRepository + ?Sized,
    W: Write,
{
    match repo.find_first().await {
        Some(person) => write_person(out, &person, format),
        None => write_absent(out, format),
    }
}

/// Replays the stream demonstrations: blocking lookup, subscribe, map, first, collect, filter,
/// next, and the strict lookup failing on a missing id. Records and names are written in
/// `format`; section headers and the strict lookup error stay plain text.
pub async fn handle_demo<R, W>(repo: &R, out: &mut W, format: OutputFormat) -> Result<()>
where
    R: PersonRepository + ?Sized,
    W: Write,
{
    section(out, "get_by_id(1)")?;
    if let Some(person) = repo.get_by_id(1).await {
        write_person(out, &person, format)?;
    }

    section(out, "get_by_id(1).map(first_name)")?;
    if let Some(first_name) = repo.get_by_id(1).await.map(|p| p.first_name().to_string()) {
        write_name(out, &first_name, format)?;
    }

    section(out, "find_all().first()")?;
    if let Some(person) = repo.find_first().await {
        write_person(out, &person, format)?;
    }

    section(out, "find_all() subscribe")?;
    let mut people = repo.find_all();
    while let Some(person) = people.next().await {
        write_person(out, &person, format)?;
    }

    section(out, "find_all().map(first_name)")?;
    let names: Vec<String> = repo
        .find_all()
        .map(|person| person.first_name().to_string())
        .collect()
        .await;
    for name in &names {
        write_name(out, name, format)?;
    }

    section(out, "find_all().collect()")?;
    for person in repo.collect_all().await {
        write_name(out, person.first_name(), format)?;
    }

    section(out, "find_all().filter(first_name == Fiona)")?;
    let mut fionas = repo
        .find_all()
        .filter(|person| future::ready(person.first_name() == "Fiona"));
    while let Some(person) = fionas.next().await {
        let full_name = format!("{}{}", person.first_name(), person.last_name());
        write_name(out, &full_name, format)?;
    }

    section(out, "find_by_first_name(Fiona)")?;
    if let Some(person) = repo.find_by_first_name("Fiona").await {
        write_name(out, person.first_name(), format)?;
    }

    section(out, "get_by_id_strict(8)")?;
    match repo.get_by_id_strict(8).await {
        Ok(person) => write_person(out, &person, format)?,
        Err(e) => {
            tracing::warn!(error = %e, "Strict lookup failed");
            writeln!(out, "error: {}", e)?;
        }
    }

    for id in [3, 6] {
        section(out, &format!("get_by_id({}) has element", id))?;
        writeln!(out, "{}", repo.get_by_id(id).await.is_some())?;
    }

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> Result<()> {
    tracing::info!(demo = title, "Running demonstration");
    writeln!(out, "== {} ==", title)?;
    Ok(())
}

fn write_person<W: Write>(out: &mut W, person: &Person, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", person)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(person)?)?,
    }
    Ok(())
}

fn write_name<W: Write>(out: &mut W, name: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", name)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(name)?)?,
    }
    Ok(())
}

fn write_absent<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "not found")?,
        OutputFormat::Json => writeln!(out, "null")?,
    }
    Ok(())
}
