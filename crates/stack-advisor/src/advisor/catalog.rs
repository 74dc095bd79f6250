use serde::Serialize;

/// How much effort a team should expect before being productive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceRating {
    Good,
    Excellent,
}

impl PerformanceRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LearningCurve {
    Gentle,
    Medium,
    Steep,
}

impl LearningCurve {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gentle => "Gentle",
            Self::Medium => "Medium",
            Self::Steep => "Steep",
        }
    }
}

/// Recommendable library plus the descriptive copy shown alongside a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
    pub best_for: Vec<&'static str>,
    pub difficulty: Difficulty,
    pub performance: PerformanceRating,
    pub learning_curve: LearningCurve,
    pub installation: &'static str,
    pub code_example: &'static str,
}

/// Ordered candidate registry. Position in the catalog is the ranking tie-break.
#[derive(Debug, Clone)]
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            candidates: standard_candidates(),
        }
    }

    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.candidates
            .iter()
            .position(|candidate| candidate.id == id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

fn standard_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "redux-toolkit",
            name: "Redux Toolkit",
            description: "The official, opinionated, batteries-included toolset for efficient Redux development",
            pros: vec![
                "Predictable state updates",
                "Excellent DevTools",
                "Large ecosystem",
                "Time-travel debugging",
            ],
            cons: vec![
                "Learning curve",
                "Boilerplate for simple apps",
                "Overkill for small projects",
            ],
            best_for: vec![
                "Large applications",
                "Complex state logic",
                "Team collaboration",
                "Predictable state updates",
            ],
            difficulty: Difficulty::Medium,
            performance: PerformanceRating::Excellent,
            learning_curve: LearningCurve::Steep,
            installation: "npm install @reduxjs/toolkit react-redux",
            code_example: r#"// store.js
import { configureStore, createSlice } from '@reduxjs/toolkit';

const counterSlice = createSlice({
  name: 'counter',
  initialState: { value: 0 },
  reducers: {
    increment: (state) => { state.value += 1; },
    decrement: (state) => { state.value -= 1; }
  }
});

export const store = configureStore({
  reducer: { counter: counterSlice.reducer }
});

// Component usage
import { useSelector, useDispatch } from 'react-redux';
const count = useSelector(state => state.counter.value);
const dispatch = useDispatch();"#,
        },
        Candidate {
            id: "zustand",
            name: "Zustand",
            description: "A small, fast, and scalable bearbones state-management solution",
            pros: vec![
                "Simple API",
                "No providers needed",
                "TypeScript support",
                "Small bundle size",
            ],
            cons: vec![
                "Newer ecosystem",
                "Less tooling",
                "No time-travel debugging",
            ],
            best_for: vec![
                "Medium apps",
                "Simple global state",
                "Quick prototyping",
                "Minimal boilerplate",
            ],
            difficulty: Difficulty::Easy,
            performance: PerformanceRating::Excellent,
            learning_curve: LearningCurve::Gentle,
            installation: "npm install zustand",
            code_example: r#"// store.js
import { create } from 'zustand';

const useStore = create((set) => ({
  count: 0,
  increment: () => set((state) => ({ count: state.count + 1 })),
  decrement: () => set((state) => ({ count: state.count - 1 }))
}));

// Component usage
const { count, increment, decrement } = useStore();"#,
        },
        Candidate {
            id: "context-api",
            name: "React Context API",
            description: "Built-in React solution for sharing state across component tree",
            pros: vec![
                "Built into React",
                "No extra dependencies",
                "Simple for basic use cases",
            ],
            cons: vec![
                "Performance issues with frequent updates",
                "Prop drilling for complex state",
                "No DevTools",
            ],
            best_for: vec![
                "Small apps",
                "Theme switching",
                "User authentication",
                "Simple global state",
            ],
            difficulty: Difficulty::Easy,
            performance: PerformanceRating::Good,
            learning_curve: LearningCurve::Gentle,
            installation: "Built into React - no installation needed",
            code_example: r#"// Context setup
const StateContext = createContext();

export const StateProvider = ({ children }) => {
  const [count, setCount] = useState(0);
  return (
    <StateContext.Provider value={{ count, setCount }}>
      {children}
    </StateContext.Provider>
  );
};

// Component usage
const { count, setCount } = useContext(StateContext);"#,
        },
        Candidate {
            id: "jotai",
            name: "Jotai",
            description: "Primitive and flexible state management for React",
            pros: vec![
                "Atomic approach",
                "No providers",
                "Great TypeScript support",
                "Composable",
            ],
            cons: vec![
                "Different mental model",
                "Smaller community",
                "Learning curve for atoms concept",
            ],
            best_for: vec![
                "Component-level state",
                "Atomic state management",
                "Complex derived state",
                "Modern React apps",
            ],
            difficulty: Difficulty::Medium,
            performance: PerformanceRating::Excellent,
            learning_curve: LearningCurve::Medium,
            installation: "npm install jotai",
            code_example: r#"// atoms.js
import { atom } from 'jotai';

export const countAtom = atom(0);
export const doubleCountAtom = atom((get) => get(countAtom) * 2);

// Component usage
import { useAtom } from 'jotai';
const [count, setCount] = useAtom(countAtom);
const [doubleCount] = useAtom(doubleCountAtom);"#,
        },
        Candidate {
            id: "react-query",
            name: "TanStack Query (React Query)",
            description: "Powerful data-fetching and server state management library",
            pros: vec![
                "Excellent caching",
                "Background updates",
                "Optimistic updates",
                "Error handling",
            ],
            cons: vec![
                "Only for server state",
                "Learning curve",
                "Not for client-only state",
            ],
            best_for: vec![
                "API data management",
                "Server state caching",
                "Real-time data",
                "Complex data fetching",
            ],
            difficulty: Difficulty::Medium,
            performance: PerformanceRating::Excellent,
            learning_curve: LearningCurve::Medium,
            installation: "npm install @tanstack/react-query",
            code_example: r#"// Query setup
import { useQuery, QueryClient, QueryClientProvider } from '@tanstack/react-query';

const queryClient = new QueryClient();

// Component usage
const { data, isLoading, error } = useQuery({
  queryKey: ['todos'],
  queryFn: () => fetch('/api/todos').then(res => res.json())
});"#,
        },
        Candidate {
            id: "valtio",
            name: "Valtio",
            description: "Proxy-based state management that feels like vanilla JavaScript",
            pros: vec![
                "Mutable-like API",
                "No boilerplate",
                "Automatic optimization",
                "Easy to learn",
            ],
            cons: vec![
                "Proxy-based (compatibility)",
                "Smaller ecosystem",
                "Different debugging",
            ],
            best_for: vec![
                "Quick prototyping",
                "Simple state updates",
                "Developers who like mutable APIs",
            ],
            difficulty: Difficulty::Easy,
            performance: PerformanceRating::Good,
            learning_curve: LearningCurve::Gentle,
            installation: "npm install valtio",
            code_example: r#"// store.js
import { proxy, useSnapshot } from 'valtio';

const state = proxy({ count: 0 });

export const increment = () => { state.count++; };
export const decrement = () => { state.count--; };

// Component usage
const snap = useSnapshot(state);
return <div>{snap.count}</div>;"#,
        },
    ]
}
