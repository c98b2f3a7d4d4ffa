use anyhow::bail;
use std::io::{BufRead, Write};

/// prompt_line shows the message and returns the next input line without the line break. A closed
/// input stream is an error, otherwise the tracker would ask forever.
pub fn prompt_line<R: BufRead, W: Write>(
    rdr: &mut R,
    wtr: &mut W,
    msg: &str,
) -> anyhow::Result<String> {
    write!(wtr, "{}", msg)?;
    wtr.flush()?;

    let mut line = String::new();
    if rdr.read_line(&mut line)? == 0 {
        bail!("Input stream was closed while waiting for: {}", msg.trim());
    }

    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_owned())
}

/// prompt_yes_no asks until the answer is either y or n.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    rdr: &mut R,
    wtr: &mut W,
    msg: &str,
) -> anyhow::Result<bool> {
    loop {
        match prompt_line(rdr, wtr, msg)?.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => writeln!(wtr, "ERROR: please select a valid response!")?,
        }
    }
}

/// prompt_names asks for the comma separated names of the athletes of the next race.
pub fn prompt_names<R: BufRead, W: Write>(rdr: &mut R, wtr: &mut W) -> anyhow::Result<Vec<String>> {
    loop {
        let names: Vec<String> = prompt_line(rdr, wtr, "The names of the athletes are: ")?
            .split(',')
            .map(|x| x.trim().to_owned())
            .collect();

        if names.iter().any(|x| x.is_empty()) {
            writeln!(wtr, "ERROR: you need to enter at least one name and no empty names!")?;
        } else {
            return Ok(names);
        }
    }
}
