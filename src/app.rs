//! Main application UI and state management.
//! Handles the deck list, deck creation, and quiz screens.

use crate::api::ApiClient;
use crate::models::card;
use crate::models::{QuizSession, ScoreRecord};
use eframe::egui;
use tracing::error;

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    List,
    Create,
    Quiz,
}

/// Main application state
pub struct FlashcardsApp {
    client: ApiClient,
    current_screen: AppScreen,

    decks: Vec<String>,
    scores: Vec<ScoreRecord>,

    new_deck_name: String,
    card_text: String,
    create_msg: String,

    quiz: Option<QuizSession>,
    user_name: String,
    quiz_msg: String,
}

impl eframe::App for FlashcardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.current_screen {
            AppScreen::List => self.render_list_screen(ctx),
            AppScreen::Create => self.render_create_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
        }
    }
}

impl FlashcardsApp {
    /// Creates the application and fetches the initial deck and score lists.
    pub fn new(client: ApiClient) -> Self {
        let mut app = Self {
            client,
            current_screen: AppScreen::List,
            decks: Vec::new(),
            scores: Vec::new(),
            new_deck_name: String::new(),
            card_text: String::new(),
            create_msg: String::new(),
            quiz: None,
            user_name: String::new(),
            quiz_msg: String::new(),
        };
        app.refresh_lists();
        app
    }

    /// Re-fetches decks and scores from the server. Failures are logged
    /// and the previous lists stay on screen.
    fn refresh_lists(&mut self) {
        match self.client.list_decks() {
            Ok(decks) => self.decks = decks,
            Err(e) => error!("failed to refresh deck list: {e}"),
        }
        match self.client.list_scores() {
            Ok(scores) => self.scores = scores,
            Err(e) => error!("failed to refresh score list: {e}"),
        }
    }

    /// Renders the deck list, with the saved quiz scores below it.
    fn render_list_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Decks ({})", self.decks.len()));

            // We store actions to execute after UI rendering to avoid borrowing conflicts
            let mut action_quiz: Option<String> = None;
            let mut action_create = false;

            egui::ScrollArea::vertical()
                .id_source("decks_list")
                .max_height(250.0)
                .show(ui, |ui| {
                    for name in &self.decks {
                        if ui.link(name).clicked() {
                            action_quiz = Some(name.clone());
                        }
                    }
                });

            if ui.button("New").clicked() {
                action_create = true;
            }

            ui.separator();

            ui.heading("Scores");
            egui::ScrollArea::vertical()
                .id_source("scores_list")
                .max_height(250.0)
                .show(ui, |ui| {
                    for record in &self.scores {
                        ui.label(format!(
                            "{}, {}: {}",
                            record.user_name, record.deck, record.score
                        ));
                    }
                });

            // Execute deferred actions
            if let Some(name) = action_quiz {
                self.start_quiz(&name);
            }
            if action_create {
                self.new_deck_name.clear();
                self.card_text.clear();
                self.create_msg.clear();
                self.current_screen = AppScreen::Create;
            }
        });
    }

    /// Renders the deck creation screen with name and card text inputs.
    fn render_create_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Create");

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut self.new_deck_name);
            });

            ui.label("Cards (one per line, formatted as question|answer):");
            ui.add(
                egui::TextEdit::multiline(&mut self.card_text)
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    self.handle_add();
                }
                if ui.button("Back").clicked() {
                    self.refresh_lists();
                    self.current_screen = AppScreen::List;
                }
            });

            if !self.create_msg.is_empty() {
                ui.label(format!("Server says: {}", self.create_msg));
            }
        });
    }

    /// Validates the entered cards and submits the new deck.
    fn handle_add(&mut self) {
        if self.decks.iter().any(|d| d == &self.new_deck_name) {
            self.create_msg = "Name is already used. Please enter new name.".to_string();
        } else if self.new_deck_name.is_empty() {
            self.create_msg = "Please enter a name.".to_string();
        } else if self.card_text.is_empty() {
            self.create_msg = "Please enter flashcards.".to_string();
        } else {
            match card::parse_deck_text(&self.card_text) {
                Err(e) => self.create_msg = e.to_string(),
                Ok(cards) => match self.client.save_deck(&self.new_deck_name, &cards) {
                    Ok(_replaced) => {
                        self.refresh_lists();
                        self.current_screen = AppScreen::List;
                    }
                    Err(e) => error!("failed to save deck: {e}"),
                },
            }
        }
    }

    /// Renders the quiz screen: one card at a time, then the summary.
    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(session) = &self.quiz {
                ui.heading(format!("Quiz: {}", session.deck_name));
                ui.label(format!(
                    "Correct: {} | Incorrect: {}",
                    session.correct, session.incorrect
                ));
                ui.add_space(20.0);

                // Store actions to execute after UI rendering
                let mut action_flip = false;
                let mut action_correct = false;
                let mut action_incorrect = false;
                let mut action_finish = false;

                if session.is_finished() {
                    ui.label("End of quiz");
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.label("Name:");
                        ui.text_edit_singleline(&mut self.user_name);
                    });
                    if ui.button("Finish").clicked() {
                        action_finish = true;
                    }
                } else if let Some((question, answer)) = session.current_card() {
                    // Clone values to avoid borrowing issues
                    let show_answer = session.show_answer;
                    let question = question.to_string();
                    let answer = answer.to_string();

                    ui.group(|ui| {
                        ui.set_min_height(200.0);
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);

                            if show_answer {
                                ui.heading("Answer:");
                                ui.label(&answer);
                            } else {
                                ui.heading("Question:");
                                ui.label(&question);
                            }

                            ui.add_space(20.0);
                        });
                    });

                    ui.add_space(20.0);

                    ui.horizontal(|ui| {
                        if ui.button("Flip").clicked() {
                            action_flip = true;
                        }
                        if ui.button("Correct").clicked() {
                            action_correct = true;
                        }
                        if ui.button("Incorrect").clicked() {
                            action_incorrect = true;
                        }
                    });
                }

                if !self.quiz_msg.is_empty() {
                    ui.label(format!("Server says: {}", self.quiz_msg));
                }

                // Execute deferred actions
                if action_flip {
                    if let Some(session) = &mut self.quiz {
                        session.flip();
                    }
                }
                if action_correct {
                    if let Some(session) = &mut self.quiz {
                        session.mark_correct();
                    }
                }
                if action_incorrect {
                    if let Some(session) = &mut self.quiz {
                        session.mark_incorrect();
                    }
                }
                if action_finish {
                    self.finish_quiz();
                }
            }
        });
    }

    /// Loads the deck from the server and starts a quiz over it.
    fn start_quiz(&mut self, name: &str) {
        match self.client.load_deck(name) {
            Ok(cards) => {
                self.quiz = Some(QuizSession::new(name.to_string(), cards));
                self.user_name.clear();
                self.quiz_msg.clear();
                self.current_screen = AppScreen::Quiz;
            }
            Err(e) => error!("failed to load deck '{name}': {e}"),
        }
    }

    /// Submits the final score under the entered name and returns to the
    /// deck list.
    fn finish_quiz(&mut self) {
        let Some(session) = &self.quiz else {
            return;
        };

        if self.user_name.is_empty() {
            self.quiz_msg = "Please enter a name.".to_string();
            return;
        }

        let score = session.score_percent().to_string();
        match self
            .client
            .save_score(&self.user_name, &session.deck_name, &score)
        {
            Ok(_added) => {
                self.quiz = None;
                self.refresh_lists();
                self.current_screen = AppScreen::List;
            }
            Err(e) => error!("failed to save score: {e}"),
        }
    }
}
