//! Built-in C++ vs Java comparison entries

use once_cell::sync::Lazy;

use crate::types::{Entry, Icon, Language, Snippets, Style, Tone};
use crate::Catalog;

const LESSON: Style = Style::new(Icon::AcademicCap, Tone::Indigo);

const CPP_MAIN: &str = r#"// free-floating function
int main( int argc, char* argv[])
{
    printf( "Hello, world" );
}"#;

const JAVA_MAIN: &str = r#"// every function must be part of a class; the main function for a particular
// class file is invoked when java <class> is run (so you can have one
// main function per class--useful for writing unit tests for a class)
class HelloWorld
{
    public static void main(String args[])
    {
        System.out.println( "Hello, World" );
    }
}"#;

const CPP_COMPILE: &str = r#"// compile as
g++ foo.cc -o outfile
// run with
./outfile"#;

const JAVA_COMPILE: &str = r#"// compile classes in foo.java to <classname>.class
javac foo.java

// run by invoking static main method in <classname>
java <classname>"#;

const JAVA_STATIC_MEMBER: &str = r#"class Foo
{
    static private int x;
    // static initialization block
    { x = 5; }
}"#;

const CPP_SCOPE: &str = r#"class MyClass
{
    public:
    static doStuff();
};

// now it's used like this
MyClass::doStuff();"#;

const JAVA_SCOPE: &str = r#"class MyClass
{
    public static doStuff()
    {
        // do stuff
    }
}

// now it's used like this
MyClass.doStuff();"#;

const CPP_OBJECT: &str = r#"// on the stack
myClass x;

// or on the heap
myClass *x = new myClass;"#;

const JAVA_OBJECT: &str = r#"// always allocated on the heap (also, always need parens for constructor)
myClass x = new myClass();"#;

const CPP_ACCESS: &str = r#"myClass x;
x.my_field; // ok

// But you use the arrow operator (->) to access fields of a class when working with a pointer:
myClass x = new MyClass;
x->my_field; // ok"#;

const JAVA_ACCESS: &str = r#"myClass x = new MyClass();
x.my_field; // ok"#;

const CPP_REFERENCE: &str = r#"// references are immutable, use pointers for more flexibility
int bar = 7, qux = 6;
int& foo = bar;"#;

const JAVA_REFERENCE: &str = r#"// references are mutable and store addresses only to objects; there are
// no raw pointers
myClass x;
x.foo(); // error, x is a null "pointer"

// note that you always use . to access a field"#;

const JAVA_ABSTRACT: &str = r#"// syntax allows you to be explicit!
abstract class Bar { public abstract void foo(); }

// or you might even want to specify an interface
interface Bar { public void foo(); }

// and later, have a class implement the interface:
class Chocolate implements Bar
{
    public void foo() { /* do something */ }
}"#;

const JAVA_NULL: &str = r#"// the compiler will catch the use of uninitialized references, but if you
// need to initialize a reference so it's known to be invalid, assign null
myClass x = null;"#;

const CPP_ARRAY: &str = r#"int x[10];
// or
int *x = new x[10];

// use x, then reclaim memory
delete[] x;"#;

const JAVA_ARRAY: &str = r#"int[] x = new int[10];
// use x, memory reclaimed by the garbage collector or returned to the
// system at the end of the program's lifetime"#;

const CPP_COLLECTION: &str = r#"vector myVec;
for ( vector<int>::iterator itr = myVec.begin();
      itr != myVec.end();
      ++itr )
{
    cout << *itr;
}"#;

const JAVA_COLLECTION: &str = r#"ArrayList myArrayList = new ArrayList();
Iterator itr = myArrayList.iterator();
while ( itr.hasNext() )
{
    System.out.println( itr.next() );
}

// or, in Java 5
ArrayList myArrayList = new ArrayList();
for( Object o : myArrayList ) {
    System.out.println( o );
}"#;

/// The built-in catalog, in display order
pub(crate) static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::new(builtin_entries()));

fn builtin_entries() -> Vec<Entry> {
    vec![
        Entry::new("Main Function", Snippets::new(CPP_MAIN, JAVA_MAIN))
            .with_style(Style::new(Icon::Clock, Tone::Teal)),
        Entry::new("Compiling", Snippets::new(CPP_COMPILE, JAVA_COMPILE))
            .with_style(Style::new(Icon::Users, Tone::Sky)),
        Entry::new("Comments", Snippets::none())
            .with_notes("Same in both languages (// and /* */ both work)")
            .with_style(Style::new(Icon::Cash, Tone::Yellow)),
        Entry::new("Class Declarations", Snippets::new("class Bar {};", "class Bar {}"))
            .with_notes("Almost the same, but Java does not require a semicolon")
            .with_style(Style::new(Icon::ReceiptRefund, Tone::Rose)),
        Entry::new("Method Declarations", Snippets::none())
            .with_notes(
                "Same, except that in Java, must always be part of a class, and may prefix with public/private/protected",
            )
            .with_style(LESSON),
        Entry::new("Constructors and destructors", Snippets::none())
            .with_notes(
                "Constructor has same syntax in both (name of the class), Java has no exact equivalent of the destructor",
            )
            .with_style(LESSON),
        Entry::new(
            "Static member functions and variables",
            Snippets::new("", JAVA_STATIC_MEMBER),
        )
        .with_notes(
            "Same as method declarations, but Java provides static initialization blocks to initialize static variables (instead of putting a definition in a source code file):",
        )
        .with_style(LESSON),
        Entry::new(
            "Scoping static methods and namespaces",
            Snippets::new(CPP_SCOPE, JAVA_SCOPE),
        )
        .with_language_note(
            Language::Cpp,
            "If you have a class and wish to refer to a static method, you use the form Class::method.",
        )
        .with_language_note(
            Language::Java,
            "All scoping in Java uses the . again, just like accessing fields of a class, so it's a bit more regular:",
        )
        .with_style(LESSON),
        Entry::new("Object declarations", Snippets::new(CPP_OBJECT, JAVA_OBJECT)).with_style(LESSON),
        Entry::new(
            "Accessing fields of objects",
            Snippets::new(CPP_ACCESS, JAVA_ACCESS),
        )
        .with_language_note(
            Language::Cpp,
            "If you're using a stack-based object, you access its fields with a dot:",
        )
        .with_language_note(
            Language::Java,
            "You always work with references (which are similar to pointers--see the next section), so you always use a dot:",
        )
        .with_style(LESSON),
        Entry::new(
            "References vs. pointers",
            Snippets::new(CPP_REFERENCE, JAVA_REFERENCE),
        )
        .with_style(LESSON),
        Entry::new(
            "Inheritance",
            Snippets::new("class Foo : public Bar\n{ ... };", "class Foo extends Bar\n{ ... }"),
        )
        .with_style(LESSON),
        Entry::new(
            "Protection levels (abstraction barriers)",
            Snippets::new(
                "public:\nvoid foo();\nvoid bar();",
                "public void foo();\npublic void bar();",
            ),
        )
        .with_style(LESSON),
        Entry::new(
            "Virtual functions",
            Snippets::new(
                "virtual int foo(); // or, non-virtually as simply int foo();",
                "// functions are virtual by default; use final to prevent overriding\nint foo(); // or, final int foo();",
            ),
        )
        .with_style(LESSON),
        Entry::new(
            "Abstract classes",
            Snippets::new(
                "// just need to include a pure virtual function\nclass Bar { public: virtual void foo() = 0; };",
                JAVA_ABSTRACT,
            ),
        )
        .with_style(LESSON),
        Entry::new("Memory management", Snippets::none())
            .with_notes(
                "Roughly the same--new allocates, but no delete in Java since it has garbage collection.",
            )
            .with_style(LESSON),
        Entry::new(
            "NULL vs. null",
            Snippets::new("// initialize pointer to NULL\nint *x = NULL;", JAVA_NULL),
        )
        .with_style(LESSON),
        Entry::new("Booleans", Snippets::new("bool foo;", "boolean foo;"))
            .with_notes("Java is a bit more verbose: you must write boolean instead of merely bool.")
            .with_style(LESSON),
        Entry::new("Const-ness", Snippets::new("const int x = 7;", "final int x = 7;"))
            .with_style(LESSON),
        Entry::new(
            "Throw Spec",
            Snippets::new("int foo() throw (IOException)", "int foo() throws IOException"),
        )
        .with_notes(
            "First, Java enforce throw specs at compile time--you must document if your method can throw an exception",
        )
        .with_style(LESSON),
        Entry::new("Arrays", Snippets::new(CPP_ARRAY, JAVA_ARRAY)).with_style(LESSON),
        Entry::new(
            "Collections and Iteration",
            Snippets::new(CPP_COLLECTION, JAVA_COLLECTION),
        )
        .with_language_note(
            Language::Cpp,
            "Iterators are members of classes. The start of a range is <container>.begin(), and the end is <container>.end(). Advance using ++ operator, and access using *.",
        )
        .with_language_note(
            Language::Java,
            "Iterator is just an interface. The start of the range is <collection>.iterator, and you check to see if you're at the end with itr.hasNext(). You get the next element using itr.next() (a combination of using ++ and * in C++).",
        )
        .with_style(LESSON),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let titles: Vec<_> = BUILTIN.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles.len(), 22);
        assert_eq!(titles.first(), Some(&"Main Function"));
        assert_eq!(titles.last(), Some(&"Collections and Iteration"));
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(BUILTIN.validate().is_ok());
    }

    #[test]
    fn test_notes_only_entries() {
        let notes_only: Vec<_> = BUILTIN
            .iter()
            .filter(|e| e.is_notes_only())
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(
            notes_only,
            vec![
                "Comments",
                "Method Declarations",
                "Constructors and destructors",
                "Memory management"
            ]
        );
    }

    #[test]
    fn test_virtual_and_abstract_have_distinct_snippets() {
        let virtual_fns = BUILTIN.get("Virtual functions").unwrap();
        let abstract_classes = BUILTIN.get("Abstract classes").unwrap();
        assert_ne!(virtual_fns.snippets.cpp, abstract_classes.snippets.cpp);
        assert!(abstract_classes.snippets.cpp.contains("= 0"));
    }

    #[test]
    fn test_field_access_note_introduces_stack_form() {
        let entry = BUILTIN.get("Accessing fields of objects").unwrap();
        assert_eq!(
            entry.language_notes.get(Language::Cpp),
            Some("If you're using a stack-based object, you access its fields with a dot:")
        );
        assert!(entry.snippets.cpp.starts_with("myClass x;"));
        assert!(entry
            .snippets
            .cpp
            .contains("// But you use the arrow operator (->) to access fields"));
    }
}
