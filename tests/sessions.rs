use cyclewalk::{
    BackEdgeRule, ConsoleError, Error,
    config::SessionConfig,
    console::Console,
    session::{run_bfs_program, run_dfs_program},
};

fn replay<P>(program: P, config: &SessionConfig, input: &'static str) -> String
where
    P: FnOnce(&mut Console<&'static [u8], Vec<u8>>, &SessionConfig) -> cyclewalk::Result<()>,
{
    let mut console = Console::new(input.as_bytes(), Vec::new());
    program(&mut console, config).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_dfs_program_full_transcript() {
    let out = replay(run_dfs_program, &SessionConfig::default(), "1\nA\n0\nA\nN\n");
    let expected = concat!(
        " *** GRAPH CYCLE DETECTION USING DFS *** \n",
        "\nEnter number of vertices: ",
        "Enter vertex labels (uppercase letters, space-separated): ",
        "\nEnter the adjacency matrix (1 for edge, 0 for no edge):\n",
        "\nConnections from A to (A ):\n",
        "  Edge from A to A (0 or 1): ",
        "\nAdjacency Matrix:\n",
        "  A \n",
        "A 0 \n",
        "\nEnter starting vertex: ",
        "\nPerforming DFS starting from vertex A...\n",
        "DFS Traversal Order: A \n",
        "No cycle detected starting from vertex A.\n",
        "\nTry DFS from another starting node? (Y/N): ",
        "\nProgram ended. Goodbye!\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn test_dfs_program_reports_cycle() {
    let input = "3\nA B C\n0 1 0\n0 0 1\n1 0 0\nB\nN\n";
    let out = replay(run_dfs_program, &SessionConfig::default(), input);
    assert!(out.contains("\nAdjacency Matrix:\n  A B C \nA 0 1 0 \nB 0 0 1 \nC 1 0 0 \n"));
    assert!(out.contains("DFS Traversal Order: B C A \n"));
    assert!(out.contains("Cycle detected! Vertices in the cycle: B C A B \n"));
}

#[test]
fn test_bfs_program_example_only() {
    let out = replay(run_bfs_program, &SessionConfig::default(), "D\nN\nN\n");
    assert!(out.starts_with(" *** GRAPH CYCLE DETECTION USING BFS *** \n"));
    assert!(out.contains(
        "\nvertexLabels = {'A', 'B', 'C', 'D', 'E', 'F', 'G'}.\nAdjacency Matrix:\n"
    ));
    assert!(out.contains("D 1 0 0 0 0 0 0 \n"));
    assert!(out.contains("\nPerforming BFS starting from vertex D...\n"));
    assert!(out.contains("BFS Traversal Order: D A C B E F G \n"));
    assert!(out.contains("No cycle detected starting from vertex D.\n"));
    assert!(out.contains("\nDo you want to enter a new graph? (Y/N): "));
    assert!(!out.contains("--- Enter Your Custom Graph ---"));
    assert!(out.ends_with("\nProgram ended. Goodbye!\n"));
}

#[test]
fn test_bfs_program_retries_and_custom_graph() {
    let input = "x\nd\nY\nG\nn\ny\n2\nX Y\n0 1\n1 0\nX\nN\n";
    let out = replay(run_bfs_program, &SessionConfig::default(), input);
    assert_eq!(out.matches("Invalid vertex label. Try again.\n").count(), 1);
    assert!(out.contains("BFS Traversal Order: D A C B E F G \n"));
    assert!(out.contains("BFS Traversal Order: G \n"));
    assert!(out.contains("\n--- Enter Your Custom Graph ---\n"));
    assert!(out.contains("\nAdjacency Matrix:\n  X Y \nX 0 1 \nY 1 0 \n"));
    assert!(out.contains("BFS Traversal Order: X Y \n"));
    assert!(out.contains("Cycle detected! Vertices in the cycle: X Y X \n"));
}

#[test]
fn test_bfs_program_with_parent_of_current_rule() {
    let config = SessionConfig {
        rule: BackEdgeRule::ParentOfCurrent,
        show_example: false,
    };
    let out = replay(run_bfs_program, &config, "2\nX Y\n0 1\n1 0\nX\nN\n");
    assert!(!out.contains("vertexLabels"));
    assert!(!out.contains("Do you want to enter a new graph?"));
    assert!(out.contains("No cycle detected starting from vertex X.\n"));
}

#[test]
fn test_session_stops_at_end_of_input() {
    let mut console = Console::new("D\n".as_bytes(), Vec::new());
    let result = run_bfs_program(&mut console, &SessionConfig::default());
    assert!(matches!(
        result,
        Err(Error::Console(ConsoleError::UnexpectedEof))
    ));
    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(out.contains("BFS Traversal Order: D A C B E F G \n"));
}

#[test]
fn test_bfs_program_reports_cycle_closed_by_cross_edge() {
    let config = SessionConfig {
        rule: BackEdgeRule::Ancestor,
        show_example: false,
    };
    let input = "3\nA B C\n0 1 1\n0 0 1\n0 1 0\nA\nN\n";
    let out = replay(run_bfs_program, &config, input);
    assert!(out.contains("BFS Traversal Order: A B C \n"));
    assert!(out.contains("Cycle detected! Vertices in the cycle: B C B \n"));
    assert!(!out.contains("No cycle detected"));
}
