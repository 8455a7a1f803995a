use crate::data::FetchError;
use crate::domain::AssetSnapshot;

/// Strictly decode a `/coins/markets` body.
///
/// A missing or null field anywhere fails the whole response, as does a
/// non-finite number, so rendering never sees a partial record.
pub fn decode_markets(body: &[u8]) -> Result<Vec<AssetSnapshot>, FetchError> {
    let assets: Vec<AssetSnapshot> =
        serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    for asset in &assets {
        check_finite(asset)?;
    }
    Ok(assets)
}

fn check_finite(asset: &AssetSnapshot) -> Result<(), FetchError> {
    let fields = [
        ("current_price", asset.current_price),
        (
            "price_change_percentage_24h",
            asset.price_change_percentage_24h,
        ),
        ("market_cap", asset.market_cap),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(FetchError::Malformed(format!(
                "{} has non-finite {}",
                asset.id, field
            )));
        }
    }
    if asset.sparkline().iter().any(|p| !p.is_finite()) {
        return Err(FetchError::Malformed(format!(
            "{} has non-finite sparkline sample",
            asset.id
        )));
    }
    Ok(())
}
