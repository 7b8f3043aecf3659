//! The built-in country table.
//!
//! Rows are ordered: current ISO 3166-1 entries first, then withdrawn
//! ISO 3166-3 entries, then UN M49 regions. Order decides which record keeps
//! an overloaded code, so historical rows never shadow current ones.

use crate::category::Category;
use crate::country::CountryEntry;

const fn regular(
    two_letter: &'static str,
    three_letter: &'static str,
    numeric: u16,
    name: &'static str,
) -> CountryEntry<'static> {
    CountryEntry::new(Some(two_letter), Some(three_letter), Some(numeric), name)
}

const fn old(
    two_letter: &'static str,
    three_letter: &'static str,
    numeric: Option<u16>,
    name: &'static str,
) -> CountryEntry<'static> {
    CountryEntry::new(Some(two_letter), Some(three_letter), numeric, name)
        .with_category(Category::Old)
}

const fn region(numeric: u16, name: &'static str) -> CountryEntry<'static> {
    CountryEntry::new(None, None, Some(numeric), name).with_category(Category::Region)
}

/// Every row of the built-in dataset, in build order.
pub const BUILTIN_COUNTRIES: &[CountryEntry<'static>] = &[
    regular("AF", "AFG", 4, "Afghanistan"),
    regular("AX", "ALA", 248, "Åland Islands"),
    regular("AL", "ALB", 8, "Albania"),
    regular("DZ", "DZA", 12, "Algeria"),
    regular("AS", "ASM", 16, "American Samoa"),
    regular("AD", "AND", 20, "Andorra"),
    regular("AO", "AGO", 24, "Angola"),
    regular("AI", "AIA", 660, "Anguilla"),
    regular("AQ", "ATA", 10, "Antarctica"),
    regular("AG", "ATG", 28, "Antigua and Barbuda"),
    regular("AR", "ARG", 32, "Argentina"),
    regular("AM", "ARM", 51, "Armenia"),
    regular("AW", "ABW", 533, "Aruba"),
    regular("AU", "AUS", 36, "Australia"),
    regular("AT", "AUT", 40, "Austria"),
    regular("AZ", "AZE", 31, "Azerbaijan"),
    regular("BS", "BHS", 44, "Bahamas"),
    regular("BH", "BHR", 48, "Bahrain"),
    regular("BD", "BGD", 50, "Bangladesh"),
    regular("BB", "BRB", 52, "Barbados"),
    regular("BY", "BLR", 112, "Belarus"),
    regular("BE", "BEL", 56, "Belgium"),
    regular("BZ", "BLZ", 84, "Belize"),
    regular("BJ", "BEN", 204, "Benin"),
    regular("BM", "BMU", 60, "Bermuda"),
    regular("BT", "BTN", 64, "Bhutan"),
    regular("BO", "BOL", 68, "Bolivia"),
    regular("BQ", "BES", 535, "Bonaire, Sint Eustatius and Saba"),
    regular("BA", "BIH", 70, "Bosnia and Herzegovina"),
    regular("BW", "BWA", 72, "Botswana"),
    regular("BV", "BVT", 74, "Bouvet Island"),
    regular("BR", "BRA", 76, "Brazil"),
    regular("IO", "IOT", 86, "British Indian Ocean Territory"),
    regular("BN", "BRN", 96, "Brunei Darussalam"),
    regular("BG", "BGR", 100, "Bulgaria"),
    regular("BF", "BFA", 854, "Burkina Faso"),
    regular("BI", "BDI", 108, "Burundi"),
    regular("CV", "CPV", 132, "Cabo Verde"),
    regular("KH", "KHM", 116, "Cambodia"),
    regular("CM", "CMR", 120, "Cameroon"),
    regular("CA", "CAN", 124, "Canada"),
    regular("KY", "CYM", 136, "Cayman Islands"),
    regular("CF", "CAF", 140, "Central African Republic"),
    regular("TD", "TCD", 148, "Chad"),
    regular("CL", "CHL", 152, "Chile"),
    regular("CN", "CHN", 156, "China"),
    regular("CX", "CXR", 162, "Christmas Island"),
    regular("CC", "CCK", 166, "Cocos (Keeling) Islands"),
    regular("CO", "COL", 170, "Colombia"),
    regular("KM", "COM", 174, "Comoros"),
    regular("CG", "COG", 178, "Congo"),
    regular("CD", "COD", 180, "Congo, Democratic Republic of the"),
    regular("CK", "COK", 184, "Cook Islands"),
    regular("CR", "CRI", 188, "Costa Rica"),
    regular("CI", "CIV", 384, "Côte d'Ivoire"),
    regular("HR", "HRV", 191, "Croatia"),
    regular("CU", "CUB", 192, "Cuba"),
    regular("CW", "CUW", 531, "Curaçao"),
    regular("CY", "CYP", 196, "Cyprus"),
    regular("CZ", "CZE", 203, "Czechia"),
    regular("DK", "DNK", 208, "Denmark"),
    regular("DJ", "DJI", 262, "Djibouti"),
    regular("DM", "DMA", 212, "Dominica"),
    regular("DO", "DOM", 214, "Dominican Republic"),
    regular("EC", "ECU", 218, "Ecuador"),
    regular("EG", "EGY", 818, "Egypt"),
    regular("SV", "SLV", 222, "El Salvador"),
    regular("GQ", "GNQ", 226, "Equatorial Guinea"),
    regular("ER", "ERI", 232, "Eritrea"),
    regular("EE", "EST", 233, "Estonia"),
    regular("SZ", "SWZ", 748, "Eswatini"),
    regular("ET", "ETH", 231, "Ethiopia"),
    regular("FK", "FLK", 238, "Falkland Islands (Malvinas)"),
    regular("FO", "FRO", 234, "Faroe Islands"),
    regular("FJ", "FJI", 242, "Fiji"),
    regular("FI", "FIN", 246, "Finland"),
    regular("FR", "FRA", 250, "France"),
    regular("GF", "GUF", 254, "French Guiana"),
    regular("PF", "PYF", 258, "French Polynesia"),
    regular("TF", "ATF", 260, "French Southern Territories"),
    regular("GA", "GAB", 266, "Gabon"),
    regular("GM", "GMB", 270, "Gambia"),
    regular("GE", "GEO", 268, "Georgia"),
    regular("DE", "DEU", 276, "Germany"),
    regular("GH", "GHA", 288, "Ghana"),
    regular("GI", "GIB", 292, "Gibraltar"),
    regular("GR", "GRC", 300, "Greece"),
    regular("GL", "GRL", 304, "Greenland"),
    regular("GD", "GRD", 308, "Grenada"),
    regular("GP", "GLP", 312, "Guadeloupe"),
    regular("GU", "GUM", 316, "Guam"),
    regular("GT", "GTM", 320, "Guatemala"),
    regular("GG", "GGY", 831, "Guernsey"),
    regular("GN", "GIN", 324, "Guinea"),
    regular("GW", "GNB", 624, "Guinea-Bissau"),
    regular("GY", "GUY", 328, "Guyana"),
    regular("HT", "HTI", 332, "Haiti"),
    regular("HM", "HMD", 334, "Heard Island and McDonald Islands"),
    regular("VA", "VAT", 336, "Holy See"),
    regular("HN", "HND", 340, "Honduras"),
    regular("HK", "HKG", 344, "Hong Kong"),
    regular("HU", "HUN", 348, "Hungary"),
    regular("IS", "ISL", 352, "Iceland"),
    regular("IN", "IND", 356, "India"),
    regular("ID", "IDN", 360, "Indonesia"),
    regular("IR", "IRN", 364, "Iran"),
    regular("IQ", "IRQ", 368, "Iraq"),
    regular("IE", "IRL", 372, "Ireland"),
    regular("IM", "IMN", 833, "Isle of Man"),
    regular("IL", "ISR", 376, "Israel"),
    regular("IT", "ITA", 380, "Italy"),
    regular("JM", "JAM", 388, "Jamaica"),
    regular("JP", "JPN", 392, "Japan"),
    regular("JE", "JEY", 832, "Jersey"),
    regular("JO", "JOR", 400, "Jordan"),
    regular("KZ", "KAZ", 398, "Kazakhstan"),
    regular("KE", "KEN", 404, "Kenya"),
    regular("KI", "KIR", 296, "Kiribati"),
    regular("KP", "PRK", 408, "Korea, Democratic People's Republic of"),
    regular("KR", "KOR", 410, "Korea, Republic of"),
    regular("KW", "KWT", 414, "Kuwait"),
    regular("KG", "KGZ", 417, "Kyrgyzstan"),
    regular("LA", "LAO", 418, "Lao People's Democratic Republic"),
    regular("LV", "LVA", 428, "Latvia"),
    regular("LB", "LBN", 422, "Lebanon"),
    regular("LS", "LSO", 426, "Lesotho"),
    regular("LR", "LBR", 430, "Liberia"),
    regular("LY", "LBY", 434, "Libya"),
    regular("LI", "LIE", 438, "Liechtenstein"),
    regular("LT", "LTU", 440, "Lithuania"),
    regular("LU", "LUX", 442, "Luxembourg"),
    regular("MO", "MAC", 446, "Macao"),
    regular("MG", "MDG", 450, "Madagascar"),
    regular("MW", "MWI", 454, "Malawi"),
    regular("MY", "MYS", 458, "Malaysia"),
    regular("MV", "MDV", 462, "Maldives"),
    regular("ML", "MLI", 466, "Mali"),
    regular("MT", "MLT", 470, "Malta"),
    regular("MH", "MHL", 584, "Marshall Islands"),
    regular("MQ", "MTQ", 474, "Martinique"),
    regular("MR", "MRT", 478, "Mauritania"),
    regular("MU", "MUS", 480, "Mauritius"),
    regular("YT", "MYT", 175, "Mayotte"),
    regular("MX", "MEX", 484, "Mexico"),
    regular("FM", "FSM", 583, "Micronesia, Federated States of"),
    regular("MD", "MDA", 498, "Moldova"),
    regular("MC", "MCO", 492, "Monaco"),
    regular("MN", "MNG", 496, "Mongolia"),
    regular("ME", "MNE", 499, "Montenegro"),
    regular("MS", "MSR", 500, "Montserrat"),
    regular("MA", "MAR", 504, "Morocco"),
    regular("MZ", "MOZ", 508, "Mozambique"),
    regular("MM", "MMR", 104, "Myanmar"),
    regular("NA", "NAM", 516, "Namibia"),
    regular("NR", "NRU", 520, "Nauru"),
    regular("NP", "NPL", 524, "Nepal"),
    regular("NL", "NLD", 528, "Netherlands"),
    regular("NC", "NCL", 540, "New Caledonia"),
    regular("NZ", "NZL", 554, "New Zealand"),
    regular("NI", "NIC", 558, "Nicaragua"),
    regular("NE", "NER", 562, "Niger"),
    regular("NG", "NGA", 566, "Nigeria"),
    regular("NU", "NIU", 570, "Niue"),
    regular("NF", "NFK", 574, "Norfolk Island"),
    regular("MK", "MKD", 807, "North Macedonia"),
    regular("MP", "MNP", 580, "Northern Mariana Islands"),
    regular("NO", "NOR", 578, "Norway"),
    regular("OM", "OMN", 512, "Oman"),
    regular("PK", "PAK", 586, "Pakistan"),
    regular("PW", "PLW", 585, "Palau"),
    regular("PS", "PSE", 275, "Palestine, State of"),
    regular("PA", "PAN", 591, "Panama"),
    regular("PG", "PNG", 598, "Papua New Guinea"),
    regular("PY", "PRY", 600, "Paraguay"),
    regular("PE", "PER", 604, "Peru"),
    regular("PH", "PHL", 608, "Philippines"),
    regular("PN", "PCN", 612, "Pitcairn"),
    regular("PL", "POL", 616, "Poland"),
    regular("PT", "PRT", 620, "Portugal"),
    regular("PR", "PRI", 630, "Puerto Rico"),
    regular("QA", "QAT", 634, "Qatar"),
    regular("RE", "REU", 638, "Réunion"),
    regular("RO", "ROU", 642, "Romania"),
    regular("RU", "RUS", 643, "Russian Federation"),
    regular("RW", "RWA", 646, "Rwanda"),
    regular("BL", "BLM", 652, "Saint Barthélemy"),
    regular("SH", "SHN", 654, "Saint Helena, Ascension and Tristan da Cunha"),
    regular("KN", "KNA", 659, "Saint Kitts and Nevis"),
    regular("LC", "LCA", 662, "Saint Lucia"),
    regular("MF", "MAF", 663, "Saint Martin (French part)"),
    regular("PM", "SPM", 666, "Saint Pierre and Miquelon"),
    regular("VC", "VCT", 670, "Saint Vincent and the Grenadines"),
    regular("WS", "WSM", 882, "Samoa"),
    regular("SM", "SMR", 674, "San Marino"),
    regular("ST", "STP", 678, "Sao Tome and Principe"),
    regular("SA", "SAU", 682, "Saudi Arabia"),
    regular("SN", "SEN", 686, "Senegal"),
    regular("RS", "SRB", 688, "Serbia"),
    regular("SC", "SYC", 690, "Seychelles"),
    regular("SL", "SLE", 694, "Sierra Leone"),
    regular("SG", "SGP", 702, "Singapore"),
    regular("SX", "SXM", 534, "Sint Maarten (Dutch part)"),
    regular("SK", "SVK", 703, "Slovakia"),
    regular("SI", "SVN", 705, "Slovenia"),
    regular("SB", "SLB", 90, "Solomon Islands"),
    regular("SO", "SOM", 706, "Somalia"),
    regular("ZA", "ZAF", 710, "South Africa"),
    regular("GS", "SGS", 239, "South Georgia and the South Sandwich Islands"),
    regular("SS", "SSD", 728, "South Sudan"),
    regular("ES", "ESP", 724, "Spain"),
    regular("LK", "LKA", 144, "Sri Lanka"),
    regular("SD", "SDN", 729, "Sudan"),
    regular("SR", "SUR", 740, "Suriname"),
    regular("SJ", "SJM", 744, "Svalbard and Jan Mayen"),
    regular("SE", "SWE", 752, "Sweden"),
    regular("CH", "CHE", 756, "Switzerland"),
    regular("SY", "SYR", 760, "Syrian Arab Republic"),
    regular("TW", "TWN", 158, "Taiwan"),
    regular("TJ", "TJK", 762, "Tajikistan"),
    regular("TZ", "TZA", 834, "Tanzania, United Republic of"),
    regular("TH", "THA", 764, "Thailand"),
    regular("TL", "TLS", 626, "Timor-Leste"),
    regular("TG", "TGO", 768, "Togo"),
    regular("TK", "TKL", 772, "Tokelau"),
    regular("TO", "TON", 776, "Tonga"),
    regular("TT", "TTO", 780, "Trinidad and Tobago"),
    regular("TN", "TUN", 788, "Tunisia"),
    regular("TR", "TUR", 792, "Türkiye"),
    regular("TM", "TKM", 795, "Turkmenistan"),
    regular("TC", "TCA", 796, "Turks and Caicos Islands"),
    regular("TV", "TUV", 798, "Tuvalu"),
    regular("UG", "UGA", 800, "Uganda"),
    regular("UA", "UKR", 804, "Ukraine"),
    regular("AE", "ARE", 784, "United Arab Emirates"),
    regular("GB", "GBR", 826, "United Kingdom"),
    regular("US", "USA", 840, "United States"),
    regular("UM", "UMI", 581, "United States Minor Outlying Islands"),
    regular("UY", "URY", 858, "Uruguay"),
    regular("UZ", "UZB", 860, "Uzbekistan"),
    regular("VU", "VUT", 548, "Vanuatu"),
    regular("VE", "VEN", 862, "Venezuela"),
    regular("VN", "VNM", 704, "Viet Nam"),
    regular("VG", "VGB", 92, "Virgin Islands (British)"),
    regular("VI", "VIR", 850, "Virgin Islands (U.S.)"),
    regular("WF", "WLF", 876, "Wallis and Futuna"),
    regular("EH", "ESH", 732, "Western Sahara"),
    regular("YE", "YEM", 887, "Yemen"),
    regular("ZM", "ZMB", 894, "Zambia"),
    regular("ZW", "ZWE", 716, "Zimbabwe"),
    // Withdrawn codes (ISO 3166-3).
    old("BQ", "ATB", None, "British Antarctic Territory"),
    old("BU", "BUR", Some(104), "Burma"),
    old("BY", "BYS", Some(112), "Byelorussian SSR"),
    old("CT", "CTE", Some(128), "Canton and Enderbury Islands"),
    old("CS", "CSK", Some(200), "Czechoslovakia"),
    old("DY", "DHY", Some(204), "Dahomey"),
    old("NQ", "ATN", Some(216), "Dronning Maud Land"),
    old("TP", "TMP", Some(626), "East Timor"),
    old("FX", "FXX", Some(249), "France, Metropolitan"),
    old("AI", "AFI", Some(262), "French Afars and Issas"),
    old("FQ", "ATF", None, "French Southern and Antarctic Territories"),
    old("DD", "DDR", Some(278), "German Democratic Republic"),
    old("GE", "GEL", Some(296), "Gilbert and Ellice Islands"),
    old("JT", "JTN", Some(396), "Johnston Island"),
    old("MI", "MID", Some(488), "Midway Islands"),
    old("AN", "ANT", Some(530), "Netherlands Antilles"),
    old("NT", "NTZ", Some(536), "Neutral Zone"),
    old("NH", "NHB", Some(548), "New Hebrides"),
    old("PC", "PCI", Some(582), "Pacific Islands, Trust Territory of the"),
    old("PZ", "PCZ", Some(594), "Panama Canal Zone"),
    old("CS", "SCG", Some(891), "Serbia and Montenegro"),
    old("SK", "SKM", Some(698), "Sikkim"),
    old("RH", "RHO", Some(716), "Southern Rhodesia"),
    old("PU", "PUS", Some(849), "United States Miscellaneous Pacific Islands"),
    old("SU", "SUN", Some(810), "Union of Soviet Socialist Republics"),
    old("HV", "HVO", Some(854), "Upper Volta"),
    old("VD", "VDR", None, "Viet-Nam, Democratic Republic of"),
    old("WK", "WAK", Some(872), "Wake Island"),
    old("YD", "YMD", Some(720), "Yemen, Democratic"),
    old("YU", "YUG", Some(891), "Yugoslavia"),
    old("ZR", "ZAR", Some(180), "Zaire"),
    // Regions (UN M49).
    region(1, "World"),
    region(2, "Africa"),
    region(5, "South America"),
    region(9, "Oceania"),
    region(11, "Western Africa"),
    region(13, "Central America"),
    region(14, "Eastern Africa"),
    region(15, "Northern Africa"),
    region(17, "Middle Africa"),
    region(18, "Southern Africa"),
    region(19, "Americas"),
    region(21, "Northern America"),
    region(29, "Caribbean"),
    region(30, "Eastern Asia"),
    region(34, "Southern Asia"),
    region(35, "South-eastern Asia"),
    region(39, "Southern Europe"),
    region(53, "Australia and New Zealand"),
    region(54, "Melanesia"),
    region(57, "Micronesia"),
    region(61, "Polynesia"),
    region(142, "Asia"),
    region(143, "Central Asia"),
    region(145, "Western Asia"),
    region(150, "Europe"),
    region(151, "Eastern Europe"),
    region(154, "Northern Europe"),
    region(155, "Western Europe"),
    region(202, "Sub-Saharan Africa"),
    region(419, "Latin America and the Caribbean"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_rows_pass_validation() {
        for (index, entry) in BUILTIN_COUNTRIES.iter().enumerate() {
            assert_eq!(
                crate::validation::validate_entry(index, entry),
                Ok(()),
                "row {index} ({}) is invalid",
                entry.name
            );
        }
    }

    #[test]
    fn regular_rows_have_distinct_codes() {
        let regular_rows: Vec<_> = BUILTIN_COUNTRIES
            .iter()
            .filter(|entry| entry.category() == Category::Regular)
            .collect();

        let two: HashSet<_> = regular_rows.iter().filter_map(|e| e.two_letter).collect();
        let three: HashSet<_> = regular_rows.iter().filter_map(|e| e.three_letter).collect();
        let numeric: HashSet<_> = regular_rows.iter().filter_map(|e| e.numeric).collect();

        assert_eq!(two.len(), regular_rows.len());
        assert_eq!(three.len(), regular_rows.len());
        assert_eq!(numeric.len(), regular_rows.len());
    }

    #[test]
    fn rows_are_grouped_by_category() {
        let first_old = BUILTIN_COUNTRIES
            .iter()
            .position(|e| e.category() == Category::Old)
            .expect("old rows present");
        let first_region = BUILTIN_COUNTRIES
            .iter()
            .position(|e| e.category() == Category::Region)
            .expect("region rows present");

        assert!(
            BUILTIN_COUNTRIES
                .iter()
                .take(first_old)
                .all(|e| e.category() == Category::Regular)
        );
        assert!(first_old < first_region);
        assert!(
            BUILTIN_COUNTRIES
                .iter()
                .skip(first_region)
                .all(|e| e.category() == Category::Region)
        );
    }
}
