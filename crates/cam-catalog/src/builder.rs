// Catalog building logic
//
// Pure and deterministic: identical inputs always yield identical output
// order and content.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::types::{BallAsset, ImageRef, JerseyRecord};

/// Jersey filenames look like `1994.png` or `1992_2.jpg`: a leading
/// 4-digit year, an optional variant digit, and a jpg/png extension.
static JERSEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(?:_(\d))?\.(?:jpg|png)$").unwrap());

/// Ball filenames only need a leading 4-digit year.
static BALL_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})").unwrap());

/// Build the ordered jersey catalog from the two directory listings.
///
/// Jersey files without a parseable year are dropped with a warning. Ball
/// files without a parseable year are excluded from matching candidacy.
/// The output is sorted ascending by year, ties keeping input file order.
pub fn build(jersey_filenames: &[String], ball_filenames: &[String]) -> Vec<JerseyRecord> {
    let balls: Vec<BallAsset> = ball_filenames
        .iter()
        .filter_map(|file| {
            let year = parse_ball_year(file)?;
            Some(BallAsset {
                year,
                path: format!("/bolas/{}", file),
            })
        })
        .collect();

    let mut records: Vec<JerseyRecord> = jersey_filenames
        .iter()
        .filter_map(|file| {
            let Some((year, variant)) = parse_jersey_filename(file) else {
                warn!(file = %file, "skipping jersey file without a parseable year");
                return None;
            };

            let ball = nearest_ball(year, &balls).map(|b| b.path.clone());
            let (name, description) = jersey_text(year, variant);

            Some(JerseyRecord {
                name,
                description,
                year,
                image: ImageRef::Path(format!("/camisolas/{}", file)),
                ball,
            })
        })
        .collect();

    // Stable sort: equal years keep original file order.
    records.sort_by_key(|r| r.year);
    records
}

/// Parse `(year, optional variant digit)` from a jersey filename.
fn parse_jersey_filename(file: &str) -> Option<(i32, Option<u8>)> {
    let caps = JERSEY_RE.captures(file)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let variant = caps.get(2).and_then(|m| m.as_str().parse::<u8>().ok());
    Some((year, variant))
}

fn parse_ball_year(file: &str) -> Option<i32> {
    BALL_YEAR_RE
        .captures(file)
        .and_then(|caps| caps.get(1)?.as_str().parse().ok())
}

/// Select the ball whose year minimizes the distance to `jersey_year`.
/// On a tie, the later ball year wins.
fn nearest_ball(jersey_year: i32, balls: &[BallAsset]) -> Option<&BallAsset> {
    let mut closest: Option<&BallAsset> = None;
    let mut min_diff = i32::MAX;

    for ball in balls {
        let diff = (jersey_year - ball.year).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = Some(ball);
        } else if diff == min_diff {
            if let Some(current) = closest {
                if ball.year > current.year {
                    closest = Some(ball);
                }
            }
        }
    }

    closest
}

fn variant_label(digit: u8) -> String {
    match digit {
        1 => "Principal".to_string(),
        2 => "Alternativa".to_string(),
        3 => "Terceira".to_string(),
        n => format!("Variante {}", n),
    }
}

fn jersey_text(year: i32, variant: Option<u8>) -> (String, String) {
    match variant {
        Some(digit) => {
            let label = variant_label(digit);
            (
                format!("Farense {} - {}", year, label),
                format!("Camisola histórica do Farense de {} - {}", year, label),
            )
        }
        None => (
            format!("Farense {}", year),
            format!("Camisola histórica do Farense de {}", year),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_name_contains_year() {
        let catalog = build(&files(&["1981.jpg", "1994.png"]), &[]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog[0].name.contains("1981"));
        assert!(catalog[1].name.contains("1994"));
    }

    #[test]
    fn test_nearest_ball_tie_prefers_later_year() {
        let balls = files(&[
            "1982.webp",
            "1986.webp",
            "1990.webp",
            "1994.webp",
            "2002.webp",
            "2014.webp",
        ]);
        let catalog = build(&files(&["1988.png"]), &balls);
        // 1986 and 1990 are both distance 2; the later year wins.
        assert_eq!(catalog[0].ball.as_deref(), Some("/bolas/1990.webp"));
    }

    #[test]
    fn test_tie_break_explicit() {
        let catalog = build(&files(&["2001.png"]), &files(&["1999.webp", "2003.webp"]));
        assert_eq!(catalog[0].ball.as_deref(), Some("/bolas/2003.webp"));
    }

    #[test]
    fn test_exact_year_match() {
        let catalog = build(&files(&["1994.png"]), &files(&["1990.webp", "1994.webp"]));
        assert_eq!(catalog[0].ball.as_deref(), Some("/bolas/1994.webp"));
    }

    #[test]
    fn test_no_ball_candidates() {
        let catalog = build(&files(&["1994.png"]), &files(&["bola.webp"]));
        assert_eq!(catalog[0].ball, None);
    }

    #[test]
    fn test_sorted_ascending_by_year() {
        let catalog = build(
            &files(&["2002.png", "1981.jpg", "1994.png", "1988.png"]),
            &[],
        );
        let years: Vec<i32> = catalog.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1981, 1988, 1994, 2002]);
    }

    #[test]
    fn test_duplicate_years_keep_input_order() {
        let catalog = build(&files(&["1992_2.png", "1992_1.png"]), &[]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Farense 1992 - Alternativa");
        assert_eq!(catalog[1].name, "Farense 1992 - Principal");
    }

    #[test]
    fn test_variant_labels() {
        let catalog = build(
            &files(&["1992_1.png", "1992_2.png", "1992_3.png", "1992_7.png"]),
            &[],
        );
        let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Farense 1992 - Principal",
                "Farense 1992 - Alternativa",
                "Farense 1992 - Terceira",
                "Farense 1992 - Variante 7",
            ]
        );
    }

    #[test]
    fn test_variant_description() {
        let catalog = build(&files(&["1992_2.png"]), &[]);
        assert_eq!(
            catalog[0].description,
            "Camisola histórica do Farense de 1992 - Alternativa"
        );
    }

    #[test]
    fn test_unparseable_jersey_files_dropped() {
        let catalog = build(&files(&["estadio.png", "199.png", "1994.png"]), &[]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].year, 1994);
    }

    #[test]
    fn test_image_ref_path() {
        let catalog = build(&files(&["1981.jpg"]), &[]);
        assert_eq!(
            catalog[0].image,
            ImageRef::Path("/camisolas/1981.jpg".to_string())
        );
    }

    #[test]
    fn test_deterministic() {
        let jerseys = files(&["1990.png", "1981.jpg", "1992_2.png"]);
        let balls = files(&["1982.webp", "1990.webp"]);
        assert_eq!(build(&jerseys, &balls), build(&jerseys, &balls));
    }
}
