//! PubMed efetch XML parsing and company-affiliation filtering.
//!
//! Walks the `<PubmedArticleSet>` tree with a streaming quick-xml state
//! machine, then filters records down to those with at least one
//! company-affiliated author. Scan order (authors, then each author's
//! affiliation blocks) follows upstream document order; the
//! first-qualifying-affiliation and first-email rules depend on it.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use crate::classify;
use crate::error::{FetchError, FetchResult};
use crate::models::{CompanyPaper, RawArticle, RawAuthor};

/// Parse one efetch XML payload and keep only qualifying papers.
pub fn parse(xml: &str) -> FetchResult<Vec<CompanyPaper>> {
    Ok(qualify(parse_articles(xml)?))
}

/// Parse efetch XML into raw article records.
///
/// Records without a PMID are dropped. XML syntax errors are fatal — no
/// partial recovery is attempted.
pub fn parse_articles(xml: &str) -> FetchResult<Vec<RawArticle>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut current: Option<RawArticle> = None;
    let mut author: Option<RawAuthor> = None;

    let mut in_pmid = false;
    let mut in_title = false;
    let mut in_pub_date = false;
    let mut in_year = false;
    let mut in_month = false;
    let mut in_day = false;
    let mut in_last_name = false;
    let mut in_fore_name = false;
    let mut in_affiliation = false;
    let mut in_email_eloc = false;
    // Affiliation text accumulates across nested markup (e.g. <sup> footnote
    // tags split it into several text events) and is pushed on the end tag.
    let mut affiliation = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => current = Some(RawArticle::default()),
                b"PMID" => in_pmid = true,
                b"ArticleTitle" => in_title = true,
                b"PubDate" => in_pub_date = true,
                // Year/Month/Day also occur under other date elements;
                // only the <PubDate> ones feed the publication date.
                b"Year" if in_pub_date => in_year = true,
                b"Month" if in_pub_date => in_month = true,
                b"Day" if in_pub_date => in_day = true,
                b"Author" => author = Some(RawAuthor::default()),
                b"LastName" => in_last_name = true,
                b"ForeName" => in_fore_name = true,
                b"Affiliation" => {
                    in_affiliation = true;
                    affiliation.clear();
                }
                b"ELocationID" => {
                    let typed_email = e
                        .try_get_attribute("EIdType")
                        .map_err(|err| FetchError::malformed(err.to_string()))?
                        .is_some_and(|attr| attr.value.as_ref() == b"email");
                    in_email_eloc = typed_email;
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| FetchError::malformed(err.to_string()))?
                    .to_string();
                if let Some(ref mut a) = author {
                    if in_last_name {
                        a.last_name = text.clone();
                    }
                    if in_fore_name {
                        a.fore_name = text.clone();
                    }
                    if in_affiliation {
                        affiliation.push_str(&text);
                    }
                    if in_email_eloc {
                        a.email_ids.push(text.clone());
                    }
                }
                if let Some(ref mut article) = current {
                    // First PMID in document order wins (later ones come from
                    // reference sub-structures like CommentsCorrections).
                    if in_pmid && article.pmid.is_none() {
                        article.pmid = Some(text.clone());
                    }
                    if in_title {
                        article.title.push_str(&text);
                    }
                    if in_year {
                        article.pub_year = text.clone();
                    }
                    if in_month {
                        article.pub_month = text.clone();
                    }
                    if in_day {
                        article.pub_day = text;
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"PMID" => in_pmid = false,
                b"ArticleTitle" => in_title = false,
                b"PubDate" => in_pub_date = false,
                b"Year" => in_year = false,
                b"Month" => in_month = false,
                b"Day" => in_day = false,
                b"LastName" => in_last_name = false,
                b"ForeName" => in_fore_name = false,
                b"Affiliation" => {
                    in_affiliation = false;
                    if let Some(ref mut a) = author {
                        if !affiliation.is_empty() {
                            a.affiliations.push(std::mem::take(&mut affiliation));
                        }
                    }
                }
                b"ELocationID" => in_email_eloc = false,
                b"Author" => {
                    if let (Some(a), Some(ref mut article)) = (author.take(), current.as_mut()) {
                        article.authors.push(a);
                    }
                }
                b"PubmedArticle" => {
                    if let Some(article) = current.take() {
                        if article.pmid.is_some() {
                            articles.push(article);
                        } else {
                            debug!("skipping record without a PMID");
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(FetchError::malformed(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(articles)
}

/// Apply the affiliation filter to one batch of raw articles.
///
/// A record qualifies only if at least one author has a company-classified
/// affiliation. For each author the first qualifying affiliation wins; the
/// corresponding email is the first non-empty email encountered in author
/// order (ELocationID-typed identifiers checked before affiliation text) and
/// is never overwritten once set.
#[must_use]
pub fn qualify(articles: Vec<RawArticle>) -> Vec<CompanyPaper> {
    articles.into_iter().filter_map(qualify_one).collect()
}

fn qualify_one(article: RawArticle) -> Option<CompanyPaper> {
    let pubmed_id = article.pmid?;
    let publication_date =
        parse_publication_date(&article.pub_year, &article.pub_month, &article.pub_day);

    let mut non_academic_authors = Vec::new();
    let mut company_affiliations: Vec<String> = Vec::new();
    let mut corresponding_email: Option<String> = None;

    for author in &article.authors {
        if corresponding_email.is_none() {
            corresponding_email = author
                .email_ids
                .iter()
                .find(|email| !email.trim().is_empty())
                .cloned()
                .or_else(|| author.affiliations.iter().find_map(|aff| classify::extract_email(aff)));
        }

        for affiliation in &author.affiliations {
            if classify::is_company_affiliation(affiliation) {
                non_academic_authors.push(author.display_name());
                let company = classify::extract_company_name(affiliation);
                if !company_affiliations.contains(&company) {
                    company_affiliations.push(company);
                }
                break;
            }
        }
    }

    if non_academic_authors.is_empty() {
        return None;
    }

    Some(CompanyPaper {
        pubmed_id,
        title: article.title,
        publication_date,
        non_academic_authors,
        company_affiliations,
        corresponding_email,
    })
}

/// Format year/month/day text fields as `YYYY-MM-DD`.
///
/// Total: any input combination yields either the empty string (no year) or a
/// formatted date. Out-of-range or unrecognizable months and days default to
/// "01".
#[must_use]
pub fn parse_publication_date(year: &str, month: &str, day: &str) -> String {
    if year.is_empty() {
        return String::new();
    }

    let month = match month.parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => format!("{m:02}"),
        Ok(_) => "01".to_string(),
        Err(_) => month_from_name(month),
    };

    let day = day.parse::<u32>().map_or_else(|_| "01".to_string(), |d| format!("{d:02}"));

    format!("{year}-{month}-{day}")
}

/// Map a month name to its two-digit number by its first three letters,
/// case-insensitive. Unrecognized names default to January.
fn month_from_name(month: &str) -> String {
    let prefix: String = month.chars().take(3).collect::<String>().to_lowercase();
    let number = match prefix.as_str() {
        "jan" => "01",
        "feb" => "02",
        "mar" => "03",
        "apr" => "04",
        "may" => "05",
        "jun" => "06",
        "jul" => "07",
        "aug" => "08",
        "sep" => "09",
        "oct" => "10",
        "nov" => "11",
        "dec" => "12",
        _ => "01",
    };
    number.to_string()
}
