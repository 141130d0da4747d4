//! Canned model replies and scraper documents.

/// Loose percentage lines, as the model usually answers the pie-chart prompt.
pub const MARKET_SHARE_REPLY: &str = "\
Here is an approximate breakdown of the global retinal imaging market:

- **Zeiss:** 28%
- **Topcon:** 18%
- **Heidelberg:** 15%
- **Canon:** 10%
- **Optos:** 9%
- **Optovue:** 6%
- **Nidek:** 5%
- **Others:** 9%

Total: 100%";

/// Markdown table answer to the company-stats prompt.
pub const RETINAL_STATS_TABLE_REPLY: &str = "\
Below are single-point estimates:

| Company | Est. Revenue (USD) | Products | Patents |
|---|---|---|---|
| Carl Zeiss Meditec | $1.2 billion | 14 | 2,500 |
| Canon | $350M | 6 | 800 |
| Topcon | $600 million | 10 | 1,100 |
| Nidek | $120M | 5 | 300 |

Figures are approximate.";

pub const COMPETITOR_FEED: &str = r#"{
  "Competitor": [
    {
      "Name": "Zeiss",
      "News": [{"Date": "2024-05-01", "Headline": "New OCT launch", "URL": "https://news/1"}],
      "Job Listings": [],
      "White Papers": [],
      "Patents": []
    }
  ]
}"#;

pub const ZEISS_PATENTS: &str = r#"{
  "patents": [
    {"Title": "Swept-source OCT", "Date": "2023-11-02", "URL": "https://patents/1", "Abstract": "..."},
    {"Title": "", "Date": "2023-10-01", "URL": "https://patents/2"},
    {"Title": "Fundus camera", "Date": "2022-01-15", "URL": "https://patents/3"}
  ]
}"#;
