use crate::graph::{GraphState, RootedWord};
use crate::session::{Event, Outcome, Trainer};
use crate::view::View;
use crate::word::WordEntry;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde_wasm_bindgen::{Serializer, from_value};
use wasm_bindgen::prelude::*;

const ALL_LEARNED_NOTICE: &str = "Congratulations, you have learned every word!";

// Structs become plain objects and `None` becomes `null`, never an ES `Map`
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

#[derive(Serialize)]
struct Reply {
    view: View,
    /// Text the page should alert, if any
    notice: Option<String>,
}

#[derive(Serialize)]
struct StyledNode {
    id: String,
    fill: &'static str,
    radius: u32,
}

/// Browser handle over one flashcard session
///
/// Every action returns `{ view, notice }`; the page redraws from `view` and
/// alerts `notice` when present.
#[wasm_bindgen]
pub struct FlashcardApp {
    trainer: Trainer<StdRng>,
    graph: GraphState,
}

impl FlashcardApp {
    fn dispatch(&mut self, event: Event) -> Result<JsValue, JsValue> {
        let notice = match self.trainer.handle(event) {
            Ok(Outcome::AllLearned) => Some(ALL_LEARNED_NOTICE.to_string()),
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
        let reply = Reply {
            view: self.trainer.view(),
            notice,
        };
        to_js(&reply)
    }

    fn node_styles(&self) -> Result<JsValue, JsValue> {
        let styles: Vec<StyledNode> = self
            .graph
            .data()
            .nodes
            .iter()
            .map(|node| {
                let style = self.graph.node_style(&node.id);
                StyledNode {
                    id: node.id.clone(),
                    fill: style.fill,
                    radius: style.radius,
                }
            })
            .collect();
        to_js(&styles)
    }
}

impl Default for FlashcardApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FlashcardApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        FlashcardApp {
            trainer: Trainer::new(StdRng::from_entropy()),
            graph: GraphState::default(),
        }
    }

    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.trainer.view())
    }

    #[wasm_bindgen(js_name = wordsLoaded)]
    pub fn words_loaded(&mut self, words: JsValue) -> Result<JsValue, JsValue> {
        let words: Vec<WordEntry> = from_value(words)?;
        self.dispatch(Event::WordsLoaded(words))
    }

    #[wasm_bindgen(js_name = wordsFailed)]
    pub fn words_failed(&mut self, reason: String) -> Result<JsValue, JsValue> {
        self.dispatch(Event::WordsFailed(reason))
    }

    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self, size: String) -> Result<JsValue, JsValue> {
        self.dispatch(Event::StartRound(size))
    }

    #[wasm_bindgen(js_name = toggleMeaning)]
    pub fn toggle_meaning(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Event::ToggleMeaning)
    }

    #[wasm_bindgen]
    pub fn next(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Event::Next)
    }

    #[wasm_bindgen]
    pub fn prev(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Event::Prev)
    }

    #[wasm_bindgen(js_name = newRound)]
    pub fn new_round(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Event::NewRound)
    }

    #[wasm_bindgen(js_name = historyPrev)]
    pub fn history_prev(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Event::HistoryPrev)
    }

    #[wasm_bindgen(js_name = historyNext)]
    pub fn history_next(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Event::HistoryNext)
    }

    #[wasm_bindgen(js_name = toggleMark)]
    pub fn toggle_mark(&mut self, word: String) -> Result<JsValue, JsValue> {
        self.dispatch(Event::ToggleMark(word))
    }

    /// Build the graph from `{word, meaning?, root?}[]` and return
    /// `{ nodes, links, settings }` for the physics library
    #[wasm_bindgen(js_name = initGraph)]
    pub fn init_graph(&mut self, words: JsValue) -> Result<JsValue, JsValue> {
        let words: Vec<RootedWord> = from_value(words)?;
        self.graph = GraphState::new(&words);

        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"nodes".into(), &to_js(&self.graph.data().nodes)?)?;
        js_sys::Reflect::set(&obj, &"links".into(), &to_js(&self.graph.data().links)?)?;
        js_sys::Reflect::set(&obj, &"settings".into(), &to_js(&self.graph.settings())?)?;
        Ok(obj.into())
    }

    /// Highlight one node; returns the style of every node
    #[wasm_bindgen]
    pub fn highlight(&mut self, word: &str) -> Result<JsValue, JsValue> {
        self.graph.highlight(word);
        self.node_styles()
    }

    #[wasm_bindgen(js_name = clearHighlight)]
    pub fn clear_highlight(&mut self) -> Result<JsValue, JsValue> {
        self.graph.clear_highlight();
        self.node_styles()
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, id: &str, x: f64, y: f64) -> Result<JsValue, JsValue> {
        to_js(&self.graph.drag_start(id, x, y))
    }

    #[wasm_bindgen]
    pub fn drag(&mut self, id: &str, x: f64, y: f64) -> Result<JsValue, JsValue> {
        to_js(&self.graph.drag(id, x, y))
    }

    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self, id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.graph.drag_end(id))
    }
}
