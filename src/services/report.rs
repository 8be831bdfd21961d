use std::fmt::Write;

use crate::core::PipelineOutcome;
use crate::models::NormalizedAd;

/// Render a batch outcome as the plain-text report printed by the CLI.
///
/// Formatting only; nothing here feeds back into the pipeline.
pub fn render(outcome: &PipelineOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Relatório do lote - Sentinela");
    let _ = writeln!(out, "Mensagens processadas: {}", outcome.processed);
    let _ = writeln!(out, "Anúncios (venda): {}", outcome.sellers.len());
    let _ = writeln!(out, "Pedidos (compra): {}", outcome.buyers.len());
    let _ = writeln!(out, "Descartadas: {}", outcome.useless);

    if !outcome.sellers.is_empty() {
        let _ = writeln!(out, "\n=== Anúncios ===");
        for ad in &outcome.sellers {
            write_ad(&mut out, ad, "Anúncio");
        }
    }

    if !outcome.buyers.is_empty() {
        let _ = writeln!(out, "\n=== Pedidos ===");
        for ad in &outcome.buyers {
            write_ad(&mut out, ad, "Pedido");
        }
    }

    let _ = writeln!(out, "\n=== Oportunidades ({}) ===", outcome.opportunities.len());
    for opportunity in &outcome.opportunities {
        let _ = writeln!(
            out,
            "[{}] Comprador: {} ({}) × Vendedor: {} ({})",
            opportunity.score,
            opportunity.buyer.author_name,
            opportunity.buyer.author_phone,
            opportunity.seller.author_name,
            opportunity.seller.author_phone,
        );
        let _ = writeln!(out, "    Critérios: {}", opportunity.matched_criteria.join(", "));
    }

    out
}

fn write_ad(out: &mut String, ad: &NormalizedAd, label: &str) {
    let _ = writeln!(out, "Corretor: {}", ad.author_name);
    let _ = writeln!(out, "Telefone: {}", ad.author_phone);
    let _ = writeln!(out, "{}: {}", label, ad.raw_text);
    let _ = writeln!(out);
}
