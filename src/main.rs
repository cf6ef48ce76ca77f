use anyhow::{anyhow, Context, Result};
use linkedlist::{reversed_list, LinkedList};
use regex::Regex;
use std::{env, fs::File, io::Read, process};

mod linkedlist;

/*
 * Parse values from input, in order.
 * Values are separated by whitespace and/or commas :
 * 1, 2 3
 * "a value, with spaces" b
 *
 * Quotes are stripped from quoted values.
 */
fn parse_values(input: &str) -> Result<Vec<&str>> {
    let mut res = vec![];

    // Either a quoted value or a run of anything but separators and quotes
    let re = Regex::new(r#""([^"]*)"|([^\s,"]+)"#)?;
    let separators = Regex::new(r"^[\s,]*$")?;
    for l in input.lines() {
        let mut last = 0;
        for captures in re.captures_iter(l) {
            let whole = captures
                .get(0)
                .ok_or(anyhow!("Failed to parse line {}", l))?;
            // Anything left between two values (a stray quote) is malformed
            if !separators.is_match(&l[last..whole.start()]) {
                return Err(anyhow!("Failed to parse line {}", l));
            }
            let value = captures
                .get(1)
                .or(captures.get(2))
                .ok_or(anyhow!("Failed to parse line {}", l))?;
            res.push(value.as_str());
            last = whole.end();
        }
        if !separators.is_match(&l[last..]) {
            return Err(anyhow!("Failed to parse line {}", l));
        }
    }

    Ok(res)
}

fn main() -> Result<()> {
    println!("Simple linked list reversal in rust :D");
    if env::args().len() != 2 {
        println!(
            "Usage : {} [values input file]",
            env::args().next().unwrap_or_else(|| "rust-linkedlist".to_string())
        );
        process::exit(1);
    }

    let path = env::args()
        .nth(1)
        .ok_or(anyhow!("Missing values input file"))?;
    let mut f = File::open(path).context("Failed to open file")?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .context("Failed to read file")?;

    let values = parse_values(&input).context("Failed to parse values")?;
    let mut list = LinkedList::new();
    for value in values.iter() {
        list.insert(*value);
    }
    println!("Parsed list :\n{}", list);

    let reversed = reversed_list(values);
    println!("Reversed list :\n{}", reversed.join(" "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_separators() {
        let input = "1 2,3
4 ,  5,,6";
        let values = parse_values(input).unwrap();
        assert_eq!(values, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn parse_quoted() {
        let input = r#""a b, c" d """#;
        let values = parse_values(input).unwrap();
        assert_eq!(values, vec!["a b, c", "d", ""]);
    }

    #[test]
    fn parse_blank() {
        assert!(parse_values("").unwrap().is_empty());
        assert!(parse_values("  \n , \n").unwrap().is_empty());
    }

    #[test]
    fn parse_unterminated_quote() {
        assert!(parse_values("1 2\n\"abc").is_err());
        assert!(parse_values("x\" y").is_err());
    }

    #[test]
    fn parse_then_reverse() {
        let input = "1, 2, 3, 4";
        let values = parse_values(input).unwrap();
        assert_eq!(reversed_list(values), vec!["4", "3", "2", "1"]);

        let input = "5 5 2";
        let values = parse_values(input).unwrap();
        assert_eq!(reversed_list(values), vec!["2", "5", "5"]);
    }
}
