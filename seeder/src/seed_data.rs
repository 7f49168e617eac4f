use rust_decimal::Decimal;
use skifield_core::domain::ski_field::value_objects::SkiFieldInput;

/// (name, country code, region, full day pass price in cents, currency, nearest town)
type SeedRow = (&'static str, &'static str, &'static str, i64, &'static str, &'static str);

const SKI_FIELDS: [SeedRow; 25] = [
    ("Whistler Blackcomb", "CAN", "British Columbia", 18500, "CAD", "Whistler"),
    ("Lake Louise", "CAN", "Alberta", 13500, "CAD", "Lake Louise"),
    ("Banff Sunshine", "CAN", "Alberta", 13000, "CAD", "Banff"),
    ("Revelstoke", "CAN", "British Columbia", 12500, "CAD", "Revelstoke"),
    ("Cypress Mountain", "CAN", "British Columbia", 8900, "CAD", "Vancouver"),
    ("Marmot Basin", "CAN", "Alberta", 10500, "CAD", "Jasper"),
    ("Vail", "USA", "Colorado", 19900, "USD", "Vail"),
    ("Aspen Snowmass", "USA", "Colorado", 20900, "USD", "Aspen"),
    ("Beaver Creek", "USA", "Colorado", 19500, "USD", "Avon"),
    ("Jackson Hole", "USA", "Wyoming", 18900, "USD", "Jackson"),
    ("Niseko", "JPN", "Hokkaido", 850000, "JPY", "Niseko"),
    ("Hakuba", "JPN", "Nagano", 650000, "JPY", "Hakuba"),
    ("Perisher", "AUS", "New South Wales", 16500, "AUD", "Jindabyne"),
    ("Mt Buller", "AUS", "Victoria", 15500, "AUD", "Mansfield"),
    ("Coronet Peak", "NZL", "Otago", 13500, "NZD", "Queenstown"),
    ("The Remarkables", "NZL", "Otago", 13500, "NZD", "Queenstown"),
    ("Roundhill", "NZL", "Canterbury", 9500, "NZD", "Lake Tekapo"),
    ("Ohau", "NZL", "Canterbury", 8900, "NZD", "Twizel"),
    ("Chamonix", "FRA", "Auvergne-Rhône-Alpes", 6500, "EUR", "Chamonix"),
    ("Courchevel", "FRA", "Auvergne-Rhône-Alpes", 6800, "EUR", "Courchevel"),
    ("Zermatt", "CHE", "Valais", 8800, "CHF", "Zermatt"),
    ("St. Anton", "AUT", "Tyrol", 6200, "EUR", "St. Anton"),
    ("Kitzbühel", "AUT", "Tyrol", 6000, "EUR", "Kitzbühel"),
    ("Cortina d'Ampezzo", "ITA", "Veneto", 5800, "EUR", "Cortina d'Ampezzo"),
    ("Portillo", "CHL", "Valparaíso", 8500, "USD", "Los Andes"),
];

/// Built-in resorts inserted by `--seed`.
pub fn ski_fields() -> Vec<SkiFieldInput> {
    SKI_FIELDS
        .iter()
        .map(
            |&(name, country_code, region, cents, currency, nearest_town)| SkiFieldInput {
                name: name.to_string(),
                country_code: country_code.to_string(),
                region: region.to_string(),
                full_day_pass_price: Decimal::new(cents, 2),
                currency: currency.to_string(),
                nearest_town: nearest_town.to_string(),
            },
        )
        .collect()
}
