//! Interactive collection of the player's numbers and preferences.
use anyhow::{Result, bail};
use lotto_game::{LottoConfig, NumberSet, PlayerSetBuilder, PlayerSetError};
use std::io::{BufRead, Write};

pub const SHOW_DRAWS_PROMPT: &str = "Do you want to see the lottery numbers for each round?";
const NOT_A_NUMBER: &str = "Please give a number";
const NOT_UNIQUE: &str = "Not a unique number!";

fn number_request(cfg: &LottoConfig) -> String {
    format!("Please give a unique number between [1, {}]", cfg.pool_size)
}

fn read_trimmed_line<R: BufRead>(input: &mut R, what: &str) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for {what}");
    }
    Ok(line.trim().to_string())
}

/// Ask for numbers one at a time until a full, valid pick is collected.
pub fn read_player_numbers<R, W>(input: &mut R, out: &mut W, cfg: &LottoConfig) -> Result<NumberSet>
where
    R: BufRead,
    W: Write,
{
    let request = number_request(cfg);
    let mut builder = PlayerSetBuilder::new(cfg);
    while !builder.is_complete() {
        writeln!(out, "{request}")?;
        out.flush()?;
        loop {
            let line = read_trimmed_line(input, "lotto numbers")?;
            let Ok(value) = line.parse::<i64>() else {
                writeln!(out, "{NOT_A_NUMBER}")?;
                out.flush()?;
                continue;
            };
            match builder.try_push(value) {
                Ok(()) => break,
                Err(PlayerSetError::Duplicate { .. }) => {
                    writeln!(out, "{NOT_UNIQUE}")?;
                    writeln!(out, "{request}")?;
                }
                Err(err) => {
                    log::debug!("rejected {value}: {err}");
                    writeln!(out, "{request}")?;
                }
            }
            out.flush()?;
        }
    }
    Ok(builder.finish()?)
}

/// Ask a yes/no question until the answer is `Y` or `N` in any case.
pub fn read_yes_no<R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{prompt} [Y, N]")?;
        out.flush()?;
        let answer = read_trimmed_line(input, "an answer")?;
        if answer.eq_ignore_ascii_case("y") {
            return Ok(true);
        }
        if answer.eq_ignore_ascii_case("n") {
            return Ok(false);
        }
    }
}
