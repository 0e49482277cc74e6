use crate::CompanyRecord;

const SAMPLE_ROWS: [(&str, &str, &str); 10] = [
    ("Apple Inc.", "https://www.apple.com", "Fortune 500"),
    ("Microsoft Corporation", "https://www.microsoft.com", "Fortune 500"),
    ("Amazon.com Inc.", "https://www.amazon.com", "Fortune 500"),
    ("Alphabet Inc. (Google)", "https://www.google.com", "Fortune 500"),
    ("Tesla Inc.", "https://www.tesla.com", "NASDAQ"),
    ("Meta Platforms Inc. (Facebook)", "https://www.meta.com", "Fortune 500"),
    ("Netflix Inc.", "https://www.netflix.com", "NASDAQ"),
    ("Salesforce Inc.", "https://www.salesforce.com", "Fortune 500"),
    ("Adobe Inc.", "https://www.adobe.com", "NASDAQ"),
    ("Zoom Video Communications", "https://zoom.us", "NASDAQ"),
];

const CANNED_SUMMARIES: [&str; 10] = [
    "Apple designs, manufactures and sells consumer electronics such as the iPhone, Mac and iPad, \
     together with software and services including the App Store, iCloud and Apple Music.",
    "Microsoft develops and licenses software, cloud services and devices, including Windows, \
     Microsoft 365 and the Azure cloud platform, for consumers and enterprises worldwide.",
    "Amazon operates one of the world's largest online retail marketplaces and, through Amazon \
     Web Services, provides on-demand cloud computing infrastructure to businesses.",
    "Alphabet is the parent company of Google, which earns most of its revenue from search and \
     advertising while also operating YouTube, Android and Google Cloud.",
    "Tesla designs and manufactures electric vehicles, battery energy storage systems and solar \
     products, and develops driver-assistance software for its cars.",
    "Meta Platforms builds social technology products including Facebook, Instagram and WhatsApp, \
     funded mainly by advertising, and invests in virtual and augmented reality.",
    "Netflix is a subscription streaming service offering films and television series, including \
     a large catalogue of original productions, to members in over 190 countries.",
    "Salesforce provides cloud-based customer relationship management software that helps \
     companies manage sales, service, marketing and analytics.",
    "Adobe develops creative, document and marketing software such as Photoshop, Acrobat and \
     Experience Cloud, sold primarily as subscriptions.",
    "Zoom Video Communications offers a cloud platform for video meetings, phone, chat and \
     webinars used by businesses, schools and individuals.",
];

const FALLBACK_SUMMARY: &str =
    "Information about this company's business activities is not readily available in public sources.";

/// Number of sample companies that start out already summarized.
const PRESEEDED: usize = 2;

/// The fixed sample data set shown by the sample view.
///
/// The first entries are already completed; the routine must leave them untouched.
pub fn sample_companies() -> Vec<CompanyRecord> {
    SAMPLE_ROWS
        .iter()
        .enumerate()
        .map(|(index, (name, website, source))| {
            let record = CompanyRecord::pending(*name, *website, *source);
            if index < PRESEEDED {
                record.with_summary(CANNED_SUMMARIES[index])
            } else {
                record
            }
        })
        .collect()
}

/// Predetermined summary text for the record at `index`.
pub fn canned_summary(index: usize) -> &'static str {
    CANNED_SUMMARIES.get(index).copied().unwrap_or(FALLBACK_SUMMARY)
}
