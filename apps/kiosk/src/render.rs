//! Plain-text rendering of the result screen and the request summary.

use client_core::{Phase, ProductCard, ResultView};
use console::style;
use shared::protocol::RecommendRequest;

pub fn request_summary(request: &RecommendRequest) -> Vec<String> {
    vec![
        format!("관광지     {}", request.region),
        format!("성별/나이  {} / {}", request.gender, request.age),
        format!("여행 기간  {}일", request.days),
        format!(
            "동반자     {}명 ({})",
            request.companion_age_groups.len(),
            request.companion_age_groups.join(", ")
        ),
        format!("관계       {}", join_or_dash(&request.companion_relations)),
        format!("테마       {}", join_or_dash(&request.categories)),
    ]
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

pub fn card_label(card: &ProductCard) -> String {
    let marker = if card.selected { "▶" } else { " " };
    match &card.display_price {
        Some(price) => format!("{marker} {}  {}", card.title, price),
        None => format!("{marker} {}", card.title),
    }
}

pub fn render_view(view: &ResultView) -> Vec<String> {
    let mut lines = Vec::new();
    match view.phase {
        Phase::Idle => {
            lines.push("추천 받기를 선택하면 입력하신 정보로 패키지를 찾아드립니다.".to_string());
            return lines;
        }
        Phase::Loading => {
            lines.push("추천 결과를 불러오는 중입니다...".to_string());
            return lines;
        }
        Phase::Error => {
            let message = view.error.as_deref().unwrap_or_default();
            lines.push(format!(
                "{} {message}",
                style("추천 요청 중 오류가 발생했습니다:").red()
            ));
            return lines;
        }
        Phase::Success => {}
    }

    if view.no_matches {
        lines.push("조건에 맞는 패키지를 찾지 못했습니다. 조건을 바꿔 다시 시도해 주세요.".to_string());
        return lines;
    }

    if let Some(report) = &view.report {
        lines.push(format!("{}", style("── AI 요약 ──").cyan()));
        lines.extend(report.lines().map(str::to_string));
        lines.push(String::new());
    }

    for card in &view.cards {
        lines.push(format!("{}", style(card_label(card)).bold()));
        lines.push(format!("    {}", style(&card.subtitle).dim()));
        if card.selected {
            for option in &card.options {
                lines.push(format!("    · {}", option.name));
                for price in &option.prices {
                    lines.push(format!("        {}  {}", price.age_type, price.price_text));
                }
            }
        }
    }
    if view.hidden > 0 {
        lines.push(format!("    외 {}개 상품", view.hidden));
    }

    if view.selected.is_some() {
        lines.push(String::new());
        lines.push(format!("{}", style("── 추천 이유 ──").cyan()));
        lines.push(view.explanation.clone().unwrap_or_default());
    }

    lines
}
