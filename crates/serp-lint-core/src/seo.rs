//! On-page SEO scoring.
//!
//! Seventeen weighted boolean checks over a product's textual content,
//! aggregated into a [`ScoreReport`]. The scorer is pure: identical input
//! always yields an identical report, and no input can make it fail —
//! missing keyphrases, empty HTML, and empty image lists all degrade into
//! failing checks with explanatory messages.
//!
//! Link-based checks (outbound, internal, competing) and keyphrase-history
//! tracking need data this tool does not have, so those rules always pass.

use crate::content::{ImageRef, ProductContent};
use crate::html;
use crate::keyphrase;
use crate::report::{CheckResult, ScoreReport};
use crate::text;

/// How much of the description's start counts as the introduction.
const INTRO_WINDOW_CHARS: usize = 200;

/// Acceptable keyphrase density range, in percent of total words.
const DENSITY_MIN: f64 = 0.5;
const DENSITY_MAX: f64 = 3.0;

/// Acceptable meta description length, in characters.
const META_DESCRIPTION_MIN_CHARS: usize = 120;
const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Acceptable SEO title width, in characters.
const TITLE_WIDTH_MIN_CHARS: usize = 30;
const TITLE_WIDTH_MAX_CHARS: usize = 70;

/// Minimum description length, in words.
const MIN_BODY_WORDS: usize = 300;

/// Maximum keyphrase length, in words.
const KEYPHRASE_MAX_WORDS: usize = 4;

/// Score a product's on-page SEO.
///
/// Returns exactly seventeen checks in fixed rule order. When no primary
/// keyphrase is set, keyphrase-dependent checks fail with a prompting
/// message while the remaining checks still evaluate.
#[tracing::instrument(skip_all, fields(slug = %content.slug))]
pub fn score_seo(content: &ProductContent) -> ScoreReport {
    let kp = content.primary_keyphrase();
    let kp = kp.as_deref();
    let kp2 = content.secondary_keyphrase();
    let plain = html::strip_tags(&content.description_html);
    let words = text::count_words(&plain);

    let checks = vec![
        placeholder("outbound-links", "Outbound links", "No problems with outbound links."),
        check_image_alt(kp, &content.images),
        check_images_present(&content.images),
        placeholder("internal-links", "Internal links", "No problems with internal links."),
        check_introduction(kp, &plain),
        check_density(kp, kp2.as_deref(), &plain, words),
        check_seo_title(kp, content.seo_title()),
        check_keyphrase_length(kp),
        check_meta_description_keyphrase(kp, &content.meta_description),
        check_meta_description_length(&content.meta_description),
        placeholder(
            "previously-used-keyphrase",
            "Previously used keyphrase",
            "The keyphrase has not been used before.",
        ),
        check_single_h1(&content.description_html),
        check_slug(kp, &content.slug),
        check_subheading(kp, &content.description_html),
        placeholder("competing-links", "Competing links", "No competing links found."),
        check_text_length(words),
        check_title_width(content.seo_title()),
    ];

    ScoreReport::from_checks(checks)
}

/// A rule that always passes; analysis for it is out of this tool's reach.
fn placeholder(id: &str, label: &str, message: &str) -> CheckResult {
    CheckResult::new(id, label, true, message)
}

fn check_image_alt(kp: Option<&str>, images: &[ImageRef]) -> CheckResult {
    const ID: &str = "image-alt-keyphrase";
    const LABEL: &str = "Image alt text";

    match kp {
        None => {
            if images.is_empty() {
                return CheckResult::new(
                    ID,
                    LABEL,
                    false,
                    "No images found; add images with descriptive alt text.",
                );
            }
            let missing = images.iter().filter(|img| !img.has_alt()).count();
            if missing == 0 {
                CheckResult::new(ID, LABEL, true, "All images have alt text.")
            } else {
                CheckResult::new(
                    ID,
                    LABEL,
                    false,
                    format!("{missing} of {} images are missing alt text.", images.len()),
                )
            }
        }
        Some(kp) => {
            if images.is_empty() {
                return CheckResult::new(
                    ID,
                    LABEL,
                    false,
                    "No images found; add images with alt text containing the keyphrase.",
                );
            }
            let hit = images
                .iter()
                .filter_map(|img| img.alt_text.as_deref())
                .any(|alt| keyphrase::contains(alt, kp));
            if hit {
                CheckResult::new(ID, LABEL, true, "An image alt text contains the keyphrase.")
            } else {
                CheckResult::new(ID, LABEL, false, "No image alt text contains the keyphrase.")
            }
        }
    }
}

fn check_images_present(images: &[ImageRef]) -> CheckResult {
    const ID: &str = "images-present";
    const LABEL: &str = "Images";

    if images.is_empty() {
        return CheckResult::new(ID, LABEL, false, "No images appear on this page.");
    }
    let missing = images.iter().filter(|img| !img.has_alt()).count();
    if missing == 0 {
        CheckResult::new(ID, LABEL, true, "Images are present and all have alt text.")
    } else {
        CheckResult::new(
            ID,
            LABEL,
            true,
            format!(
                "Images are present; {missing} of {} are missing alt text.",
                images.len()
            ),
        )
    }
}

fn check_introduction(kp: Option<&str>, plain: &str) -> CheckResult {
    const ID: &str = "keyphrase-in-introduction";
    const LABEL: &str = "Keyphrase in introduction";

    let Some(kp) = kp else {
        return CheckResult::new(ID, LABEL, false, "Enter a keyphrase to check the introduction.");
    };
    let intro: String = plain.chars().take(INTRO_WINDOW_CHARS).collect();
    if intro.to_lowercase().contains(kp) {
        CheckResult::new(ID, LABEL, true, "The keyphrase appears at the start of the description.")
    } else {
        CheckResult::new(ID, LABEL, false, "The keyphrase does not appear in the introduction.")
    }
}

fn check_density(kp: Option<&str>, kp2: Option<&str>, plain: &str, words: usize) -> CheckResult {
    const ID: &str = "keyphrase-density";
    const LABEL: &str = "Keyphrase density";

    let Some(kp) = kp else {
        return CheckResult::new(ID, LABEL, false, "Enter a keyphrase to measure its density.");
    };

    let density = keyphrase::density(kp, plain, words);
    let density2 = kp2.map(|kp2| keyphrase::density(kp2, plain, words));

    let in_range = |d: f64| (DENSITY_MIN..=DENSITY_MAX).contains(&d);

    if in_range(density) {
        CheckResult::new(
            ID,
            LABEL,
            true,
            format!("Keyphrase density is {density:.1}%, within the {DENSITY_MIN}\u{2013}{DENSITY_MAX}% range."),
        )
    } else if density2.is_some_and(in_range) {
        CheckResult::new(
            ID,
            LABEL,
            true,
            format!(
                "Secondary keyphrase density is {:.1}%, within the {DENSITY_MIN}\u{2013}{DENSITY_MAX}% range.",
                density2.unwrap_or_default()
            ),
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!("Keyphrase density is {density:.1}%, outside the {DENSITY_MIN}\u{2013}{DENSITY_MAX}% range."),
        )
    }
}

fn check_seo_title(kp: Option<&str>, seo_title: &str) -> CheckResult {
    const ID: &str = "keyphrase-in-title";
    const LABEL: &str = "Keyphrase in SEO title";

    let Some(kp) = kp else {
        return CheckResult::new(ID, LABEL, false, "Enter a keyphrase to check the SEO title.");
    };
    if keyphrase::contains(seo_title, kp) {
        CheckResult::new(ID, LABEL, true, "The SEO title contains the keyphrase.")
    } else {
        CheckResult::new(ID, LABEL, false, "The SEO title does not contain the keyphrase.")
    }
}

fn check_keyphrase_length(kp: Option<&str>) -> CheckResult {
    const ID: &str = "keyphrase-length";
    const LABEL: &str = "Keyphrase length";

    let Some(kp) = kp else {
        return CheckResult::new(ID, LABEL, true, "No keyphrase set.");
    };
    let word_count = kp.split_whitespace().count();
    if word_count <= KEYPHRASE_MAX_WORDS {
        CheckResult::new(ID, LABEL, true, format!("The keyphrase is {word_count} words long."))
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!(
                "The keyphrase is {word_count} words long; use at most {KEYPHRASE_MAX_WORDS}."
            ),
        )
    }
}

fn check_meta_description_keyphrase(kp: Option<&str>, meta_description: &str) -> CheckResult {
    const ID: &str = "keyphrase-in-meta-description";
    const LABEL: &str = "Keyphrase in meta description";

    let Some(kp) = kp else {
        return CheckResult::new(ID, LABEL, false, "Enter a keyphrase to check the meta description.");
    };
    if keyphrase::contains(meta_description, kp) {
        CheckResult::new(ID, LABEL, true, "The meta description contains the keyphrase.")
    } else {
        CheckResult::new(ID, LABEL, false, "The meta description does not contain the keyphrase.")
    }
}

fn check_meta_description_length(meta_description: &str) -> CheckResult {
    const ID: &str = "meta-description-length";
    const LABEL: &str = "Meta description length";

    let len = meta_description.chars().count();
    if (META_DESCRIPTION_MIN_CHARS..=META_DESCRIPTION_MAX_CHARS).contains(&len) {
        CheckResult::new(ID, LABEL, true, format!("The meta description is {len} characters."))
    } else if len == 0 {
        CheckResult::new(ID, LABEL, false, "No meta description set.")
    } else if len < META_DESCRIPTION_MIN_CHARS {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!(
                "The meta description is {len} characters; use at least {META_DESCRIPTION_MIN_CHARS}."
            ),
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!(
                "The meta description is {len} characters; keep it under {META_DESCRIPTION_MAX_CHARS}."
            ),
        )
    }
}

fn check_single_h1(description_html: &str) -> CheckResult {
    const ID: &str = "single-h1";
    const LABEL: &str = "Single title";

    let count = html::count_h1(description_html);
    if count <= 1 {
        CheckResult::new(ID, LABEL, true, "The description has at most one H1 heading.")
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!("The description has {count} H1 headings; use at most one."),
        )
    }
}

fn check_slug(kp: Option<&str>, slug: &str) -> CheckResult {
    const ID: &str = "keyphrase-in-slug";
    const LABEL: &str = "Keyphrase in slug";

    let Some(kp) = kp else {
        return CheckResult::new(ID, LABEL, false, "Enter a keyphrase to check the slug.");
    };
    let slug_lower = slug.to_lowercase();
    let hyphenated = kp.replace(' ', "-");
    if slug_lower.contains(&hyphenated) || slug_lower.contains(kp) {
        CheckResult::new(ID, LABEL, true, "The slug contains the keyphrase.")
    } else {
        CheckResult::new(ID, LABEL, false, "The slug does not contain the keyphrase.")
    }
}

fn check_subheading(kp: Option<&str>, description_html: &str) -> CheckResult {
    const ID: &str = "keyphrase-in-subheading";
    const LABEL: &str = "Keyphrase in subheading";

    let Some(kp) = kp else {
        return CheckResult::new(ID, LABEL, false, "Enter a keyphrase to check subheadings.");
    };
    let subheadings = html::subheadings(description_html);
    if subheadings.is_empty() {
        CheckResult::new(ID, LABEL, false, "The description has no H2 or H3 subheadings.")
    } else if subheadings.iter().any(|h| keyphrase::contains(h, kp)) {
        CheckResult::new(ID, LABEL, true, "A subheading contains the keyphrase.")
    } else {
        CheckResult::new(ID, LABEL, false, "No subheading contains the keyphrase.")
    }
}

fn check_text_length(words: usize) -> CheckResult {
    const ID: &str = "text-length";
    const LABEL: &str = "Text length";

    if words >= MIN_BODY_WORDS {
        CheckResult::new(ID, LABEL, true, format!("The description is {words} words long."))
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!("The description is {words} words long; write at least {MIN_BODY_WORDS}."),
        )
    }
}

fn check_title_width(seo_title: &str) -> CheckResult {
    const ID: &str = "title-width";
    const LABEL: &str = "SEO title width";

    let len = seo_title.chars().count();
    if (TITLE_WIDTH_MIN_CHARS..=TITLE_WIDTH_MAX_CHARS).contains(&len) {
        CheckResult::new(ID, LABEL, true, format!("The SEO title is {len} characters."))
    } else if len == 0 {
        CheckResult::new(ID, LABEL, false, "No SEO title set.")
    } else if len < TITLE_WIDTH_MIN_CHARS {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!("The SEO title is {len} characters; use at least {TITLE_WIDTH_MIN_CHARS}."),
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!("The SEO title is {len} characters; keep it under {TITLE_WIDTH_MAX_CHARS}."),
        )
    }
}
