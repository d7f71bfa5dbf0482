//! Interactive terminal screens driving the wizard flow.

use anyhow::Result;
use client_core::{RecommendLifecycle, ResultPresenter};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use shared::domain::{AgeBand, Gender, GroupId, Region, Relation, Theme};
use tracing::info;
use wizard::{CompanionsStep, ProfileStep, ReviewStep, TripStep, WizardFlow, WizardRules};

use crate::{config::Settings, render};

const PREV: &str = "이전";
const NEXT: &str = "다음";

pub struct Kiosk {
    term: Term,
    theme: ColorfulTheme,
    lifecycle: RecommendLifecycle,
    settings: Settings,
    dump_request: bool,
}

enum ResultExit {
    Back,
    Restart,
    Quit,
}

impl Kiosk {
    pub fn new(lifecycle: RecommendLifecycle, settings: Settings, dump_request: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
            lifecycle,
            settings,
            dump_request,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let mut flow = WizardFlow::start(WizardRules {
            require_relation: self.settings.require_relation,
        });

        loop {
            flow = match flow {
                WizardFlow::Home(state) => {
                    if !self.home()? {
                        return Ok(());
                    }
                    WizardFlow::Home(state).advance()
                }
                WizardFlow::Profile(step) => self.profile(step)?,
                WizardFlow::Companions(step) => self.companions(step)?,
                WizardFlow::Trip(step) => self.trip(step)?,
                WizardFlow::Review(step) => {
                    if self.dump_request {
                        println!("{}", serde_json::to_string_pretty(step.request())?);
                        return Ok(());
                    }
                    match self.result(&step).await? {
                        ResultExit::Back => WizardFlow::Review(step).back(),
                        ResultExit::Restart => WizardFlow::Review(step).restart(),
                        ResultExit::Quit => return Ok(()),
                    }
                }
            };
        }
    }

    fn header(&self, title: &str, subtitle: &str) -> Result<()> {
        self.term.clear_screen()?;
        println!();
        println!("  {}", style(title).cyan().bold());
        println!("  {}", style(subtitle).dim());
        println!();
        Ok(())
    }

    fn choose(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on(&self.term)?)
    }

    fn next_label(&self, allowed: bool) -> String {
        if allowed {
            NEXT.to_string()
        } else {
            style(NEXT).dim().to_string()
        }
    }

    fn home(&self) -> Result<bool> {
        self.header(
            "당신의 여행, 나트랑부터 푸꾸옥까지",
            "딱 맞는 여행지를 찾아드려요. 간단한 선택으로 시작하세요.",
        )?;
        let items = ["시작하기".to_string(), "종료".to_string()];
        Ok(self.choose("", &items)? == 0)
    }

    fn profile(&self, mut step: ProfileStep) -> Result<WizardFlow> {
        loop {
            self.header(
                "여행자 정보",
                "AI가 최적의 여행을 설계할 수 있도록 기본 정보를 알려주세요.",
            )?;
            let profile = step.state().profile;
            let items = vec![
                format!("성별    {}", profile.gender.map_or("-", Gender::label)),
                format!("나이대  {}", profile.age_band.map_or("-", AgeBand::as_wire)),
                format!("관광지  {}", profile.destination.map_or("-", Region::as_wire)),
                self.next_label(step.next_allowed()),
                PREV.to_string(),
            ];
            match self.choose("항목을 선택하세요", &items)? {
                0 => {
                    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
                    let idx = self.choose("성별", &to_items(&labels))?;
                    step.select_gender(Gender::ALL[idx]);
                }
                1 => {
                    let labels: Vec<&str> =
                        AgeBand::TRAVELER.iter().map(|b| b.as_wire()).collect();
                    let idx = self.choose("나이대", &to_items(&labels))?;
                    step.select_age_band(AgeBand::TRAVELER[idx]);
                }
                2 => {
                    let labels: Vec<&str> = Region::ALL.iter().map(|r| r.as_wire()).collect();
                    let idx = self.choose("관광지", &to_items(&labels))?;
                    step.select_destination(Region::ALL[idx]);
                }
                3 => return Ok(WizardFlow::Profile(step).advance()),
                _ => return Ok(WizardFlow::Profile(step).back()),
            }
        }
    }

    fn companions(&self, mut step: CompanionsStep) -> Result<WizardFlow> {
        loop {
            self.header(
                "여행 동반자",
                "동반자 정보를 알려주세요. AI가 상세 일정을 제공해드립니다.",
            )?;
            let companions = &step.state().companions;
            println!("  총 {}명", companions.total_headcount());
            println!();

            let groups: Vec<GroupId> = companions.entries().iter().map(|e| e.id()).collect();
            let mut items: Vec<String> = companions
                .entries()
                .iter()
                .map(|entry| match entry.age_band().hint() {
                    Some(hint) => format!("{} ({hint})  × {}", entry.age_band(), entry.count()),
                    None => format!("{}  × {}", entry.age_band(), entry.count()),
                })
                .collect();
            let relations: Vec<String> = step
                .state()
                .relations
                .iter()
                .map(|r| r.as_wire().to_string())
                .collect();
            items.push("+ 동반자 그룹 추가".to_string());
            items.push(format!(
                "관계  {}",
                if relations.is_empty() { "-".to_string() } else { relations.join(", ") }
            ));
            items.push(self.next_label(step.next_allowed()));
            items.push(PREV.to_string());

            let choice = self.choose("항목을 선택하세요", &items)?;
            let fixed = choice.checked_sub(groups.len());
            match fixed {
                None => self.edit_group(&mut step, groups[choice])?,
                Some(0) => {
                    step.add_group();
                }
                Some(1) => {
                    let picked = self.multi_select(
                        "동반자와의 관계 (스페이스로 선택)",
                        Relation::ALL,
                        |r| step.state().relations.contains(r),
                    )?;
                    for relation in Relation::ALL {
                        if picked.contains(relation) != step.state().relations.contains(*relation) {
                            step.toggle_relation(*relation);
                        }
                    }
                }
                Some(2) => return Ok(WizardFlow::Companions(step).advance()),
                Some(_) => return Ok(WizardFlow::Companions(step).back()),
            }
        }
    }

    fn edit_group(&self, step: &mut CompanionsStep, id: GroupId) -> Result<()> {
        let items = ["+1명", "-1명", "나이대 변경", "그룹 삭제", "완료"].map(String::from);
        loop {
            let count = step
                .state()
                .companions
                .entry(id)
                .map(|entry| entry.count())
                .unwrap_or_default();
            match self.choose(&format!("현재 {count}명"), &items)? {
                0 => {
                    step.increment(id);
                }
                1 => {
                    step.decrement(id);
                }
                2 => {
                    let labels: Vec<String> = AgeBand::ALL
                        .iter()
                        .map(|band| match band.hint() {
                            Some(hint) => format!("{band} ({hint})"),
                            None => band.to_string(),
                        })
                        .collect();
                    let idx = self.choose("나이대", &labels)?;
                    step.set_age_band(id, AgeBand::ALL[idx]);
                }
                3 => {
                    step.remove_group(id);
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }
    }

    fn trip(&self, mut step: TripStep) -> Result<WizardFlow> {
        loop {
            self.header("여행 테마", "희망하는 여행 테마와 기간을 선택해주세요.")?;
            let themes: Vec<String> = step
                .state()
                .themes
                .iter()
                .map(|t| t.as_wire().to_string())
                .collect();
            let items = vec![
                format!(
                    "테마  {}",
                    if themes.is_empty() { "-".to_string() } else { themes.join(" ") }
                ),
                format!("기간  {}일", step.state().duration.days()),
                self.next_label(step.next_allowed()),
                PREV.to_string(),
            ];
            match self.choose("항목을 선택하세요", &items)? {
                0 => {
                    let picked = self.multi_select(
                        "여행 테마 (스페이스로 선택)",
                        Theme::ALL,
                        |t| step.state().themes.contains(t),
                    )?;
                    for theme in Theme::ALL {
                        if picked.contains(theme) != step.state().themes.contains(*theme) {
                            step.toggle_theme(*theme);
                        }
                    }
                }
                1 => {
                    let days_items = ["+1일", "-1일", "완료"].map(String::from);
                    loop {
                        let days = step.state().duration.days();
                        match self.choose(&format!("여행 기간 {days}일"), &days_items)? {
                            0 => {
                                step.increase_days();
                            }
                            1 => {
                                step.decrease_days();
                            }
                            _ => break,
                        }
                    }
                }
                2 => return Ok(WizardFlow::Trip(step).advance()),
                _ => return Ok(WizardFlow::Trip(step).back()),
            }
        }
    }

    fn multi_select<T: Copy + std::fmt::Display>(
        &self,
        prompt: &str,
        options: &[T],
        is_selected: impl Fn(T) -> bool,
    ) -> Result<Vec<T>> {
        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        let defaults: Vec<bool> = options.iter().map(|o| is_selected(*o)).collect();
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .defaults(&defaults)
            .interact_on(&self.term)?;
        Ok(picked.into_iter().map(|idx| options[idx]).collect())
    }

    async fn result(&self, step: &ReviewStep) -> Result<ResultExit> {
        let mut presenter = ResultPresenter::new(
            &self.lifecycle,
            step.request().clone(),
            self.settings.display_cap,
        );

        loop {
            self.header(
                "추천 결과",
                "입력하신 정보를 바탕으로 AI가 추천한 여행 패키지입니다.",
            )?;
            for line in render::request_summary(presenter.request()) {
                println!("  {}", style(line).dim());
            }
            println!();
            let view = presenter.view().await;
            for line in render::render_view(&view) {
                println!("  {line}");
            }
            println!();

            let mut items: Vec<String> = view.cards.iter().map(render::card_label).collect();
            let card_count = items.len();
            items.push("추천 받기".to_string());
            items.push(PREV.to_string());
            items.push("처음으로".to_string());
            items.push("종료".to_string());

            let choice = self.choose("", &items)?;
            match choice.checked_sub(card_count) {
                None => {
                    presenter.select(choice).await;
                }
                Some(0) => {
                    println!("  추천 결과를 불러오는 중입니다...");
                    // Failures are mirrored into the view.
                    if let Err(err) = presenter.submit().await {
                        info!(kind = ?err.kind, "submission did not produce results");
                    }
                }
                Some(1) => return Ok(ResultExit::Back),
                Some(2) => return Ok(ResultExit::Restart),
                Some(_) => return Ok(ResultExit::Quit),
            }
        }
    }
}

fn to_items(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}
