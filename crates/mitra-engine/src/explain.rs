//! Plain-language explanation of a categorized report.

use mitra_core::models::cardio::{CardioLevel, CardioRiskScore, CardioStatus};
use mitra_core::models::classification::{ClassifiedParameter, Status};
use mitra_core::models::patient::Language;
use mitra_core::models::report::CategorizedReport;

use crate::phrases;

/// Render a report summary in `language`. Output depends only on the inputs.
pub fn explain(categorized: &CategorizedReport, cardio: &CardioRiskScore, language: Language) -> String {
    let mut sentences = vec![opening(categorized, language)];

    for parameter in categorized.abnormal() {
        sentences.push(describe(parameter, language));
    }

    if !categorized.incomplete.is_empty() {
        let names = categorized
            .incomplete
            .iter()
            .map(|m| m.parameter.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        sentences.push(match language {
            Language::En => format!("These parameters could not be interpreted: {names}."),
            Language::Hi => format!("इन पैरामीटर की व्याख्या नहीं हो सकी: {names}।"),
        });
    }

    sentences.push(cardio_sentence(cardio, language));

    sentences.push(
        match language {
            Language::En => "Please discuss these results with your doctor.",
            Language::Hi => "कृपया इन परिणामों पर अपने डॉक्टर से चर्चा करें।",
        }
        .to_string(),
    );

    sentences.join(" ")
}

fn opening(categorized: &CategorizedReport, language: Language) -> String {
    let red = categorized.red_flags.len();
    let borderline = categorized.borderline.len();
    let normal = categorized.normal.len();

    match language {
        Language::En if categorized.is_empty() => "No parameters were provided for interpretation.".to_string(),
        Language::Hi if categorized.is_empty() => "व्याख्या के लिए कोई पैरामीटर नहीं दिया गया।".to_string(),
        Language::En if red + borderline + normal == 0 => {
            "None of the submitted parameters could be matched to a guideline range.".to_string()
        }
        Language::Hi if red + borderline + normal == 0 => {
            "दिए गए किसी भी पैरामीटर का मिलान दिशानिर्देश सीमा से नहीं हो सका।".to_string()
        }
        Language::En if red + borderline == 0 => {
            format!("All {normal} recognised parameters are within guideline ranges.")
        }
        Language::Hi if red + borderline == 0 => {
            format!("सभी {normal} पहचाने गए पैरामीटर दिशानिर्देश सीमा के भीतर हैं।")
        }
        Language::En => format!("Your report shows {red} red-flag and {borderline} borderline parameters."),
        Language::Hi => format!("आपकी रिपोर्ट में {red} रेड-फ्लैग और {borderline} सीमांत पैरामीटर हैं।"),
    }
}

fn describe(p: &ClassifiedParameter, language: Language) -> String {
    let entry = phrases::lookup(&p.key);
    let phrase = entry.map_or_else(|| phrases::generic(language), |e| e.phrase(p.direction, language));
    let value = format_value(p.value);
    let status = status_label(p.status, language);

    match language {
        Language::En => format!(
            "{} is {value} {} ({status}; {}). {phrase}",
            p.parameter, p.unit, p.guideline_reference
        ),
        Language::Hi => {
            let name = entry.map_or(p.parameter.as_str(), |e| e.name_hi);
            format!(
                "{name}: {value} {} ({status}; {})। {phrase}",
                p.unit, p.guideline_reference
            )
        }
    }
}

fn cardio_sentence(cardio: &CardioRiskScore, language: Language) -> String {
    match (cardio.status, cardio.score, cardio.level) {
        (CardioStatus::Calculated, Some(score), Some(level)) => {
            let level = level_label(level, language);
            match language {
                Language::En => format!("Estimated cardiovascular risk score: {score}/100 ({level} risk)."),
                Language::Hi => format!("अनुमानित हृदय जोखिम स्कोर: {score}/100 ({level} जोखिम)।"),
            }
        }
        _ => {
            let names = cardio
                .missing
                .iter()
                .map(|key| phrases::name_of(key, language))
                .collect::<Vec<_>>()
                .join(", ");
            match language {
                Language::En => format!(
                    "A cardiovascular risk score could not be calculated because these values are missing: {names}."
                ),
                Language::Hi => format!(
                    "हृदय जोखिम स्कोर की गणना नहीं हो सकी क्योंकि ये मान उपलब्ध नहीं हैं: {names}।"
                ),
            }
        }
    }
}

pub fn status_label(status: Status, language: Language) -> &'static str {
    match (status, language) {
        (Status::Normal, Language::En) => "normal",
        (Status::Borderline, Language::En) => "borderline",
        (Status::High, Language::En) => "high",
        (Status::Low, Language::En) => "low",
        (Status::Critical, Language::En) => "critical",
        (Status::Normal, Language::Hi) => "सामान्य",
        (Status::Borderline, Language::Hi) => "सीमांत",
        (Status::High, Language::Hi) => "अधिक",
        (Status::Low, Language::Hi) => "कम",
        (Status::Critical, Language::Hi) => "गंभीर",
    }
}

fn level_label(level: CardioLevel, language: Language) -> &'static str {
    match (level, language) {
        (CardioLevel::Low, Language::En) => "low",
        (CardioLevel::Moderate, Language::En) => "moderate",
        (CardioLevel::High, Language::En) => "high",
        (CardioLevel::Low, Language::Hi) => "कम",
        (CardioLevel::Moderate, Language::Hi) => "मध्यम",
        (CardioLevel::High, Language::Hi) => "उच्च",
    }
}

/// Whole numbers without decimals, otherwise at most two decimals.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
