use tictactoe_back::{graphql::build_schema, state::AppState};

fn main() {
    print!("{}", build_schema(AppState::in_memory()).sdl());
}
