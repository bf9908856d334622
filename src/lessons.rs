//! The compiled-in HTML curriculum: every lesson body is a trusted HTML
//! fragment authored alongside the code, grouped into the sidebar's
//! collapsible sections.

use crate::content::{ContentRecord, Difficulty, NavLink, NavSection};

pub(crate) const SECTIONS: &[NavSection] = &[
    NavSection {
        id: "getting-started",
        title: "Getting Started",
        links: &[
            NavLink {
                key: "html-introduction",
                label: "Introduction",
            },
            NavLink {
                key: "html-working",
                label: "How HTML Works",
            },
            NavLink {
                key: "html-installation",
                label: "Installation & Setup",
            },
            NavLink {
                key: "html-execution",
                label: "Your First Webpage",
            },
        ],
    },
    NavSection {
        id: "fundamentals",
        title: "HTML Fundamentals",
        links: &[
            NavLink {
                key: "html-structure",
                label: "Page Structure",
            },
            NavLink {
                key: "html-tags",
                label: "Tags",
            },
            NavLink {
                key: "html-elements",
                label: "Elements",
            },
            NavLink {
                key: "html-attributes",
                label: "Attributes",
            },
            NavLink {
                key: "html-comments",
                label: "Comments",
            },
            NavLink {
                key: "html-id-classes",
                label: "Id & Classes",
            },
        ],
    },
    NavSection {
        id: "core-tags",
        title: "Everyday Tags",
        links: &[
            NavLink {
                key: "skeletal-tags",
                label: "Skeletal Tags",
            },
            NavLink {
                key: "heading-tags",
                label: "Heading Tags",
            },
            NavLink {
                key: "paragraph-tag",
                label: "Paragraph Tag",
            },
            NavLink {
                key: "horizontal-line",
                label: "Horizontal Line",
            },
            NavLink {
                key: "line-break",
                label: "Line Break",
            },
        ],
    },
];

pub(crate) const LESSONS: &[(&str, ContentRecord)] = &[
    (
        "html-introduction",
        ContentRecord {
            title: "HTML Introduction",
            reading_time: "5 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>HTML (HyperText Markup Language) is the markup language used to build
web pages. "Hypertext" refers to text that links one page to another;
"markup language" means the document is described with tags.</p>
<ul>
  <li>An HTML document starts with <code>&lt;!DOCTYPE html&gt;</code>.</li>
  <li>The skeleton is built from <code>&lt;html&gt;</code>,
      <code>&lt;head&gt;</code> and <code>&lt;body&gt;</code>.</li>
  <li>The browser reads the document and renders its elements.</li>
</ul>
<h2>What is HTML?</h2>
<p>HTML was created by Tim Berners-Lee in 1991. It defines the building
blocks of a page: headings, paragraphs, links, images. Think of it as the
skeleton of a website, the way bricks and mortar give a house its shape.
CSS and JavaScript are layered on top for appearance and behavior.</p>
<h2>In a nutshell</h2>
<ul>
  <li>HTML is the language of the web; every page you visit is one.</li>
  <li>It defines the structure and layout of web content.</li>
  <li>Files carry a <code>.html</code> or <code>.htm</code> extension.</li>
  <li>HTML5 is the current version.</li>
</ul>
<h2>Features of HTML</h2>
<ul>
  <li>Platform-independent: the same page renders across operating
      systems and browsers.</li>
  <li>Images, video and audio can be embedded in a page.</li>
  <li>It is a markup language, not a programming language.</li>
  <li>Combined with CSS and JavaScript it produces interactive pages.</li>
</ul>
"#,
        },
    ),
    (
        "html-working",
        ContentRecord {
            title: "How HTML Works",
            reading_time: "7 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>The frontend of a website is the visible part users interact with:
tables, images, buttons. It is built with HTML, CSS and JavaScript. The
backend stores and processes data behind the scenes, in languages such as
Python, Ruby or Java.</p>
<h2>How do websites work?</h2>
<p>Websites follow the client-server model. When you open a page, your
browser (the client) sends a request to a server. The server answers with
an HTML document, and the browser turns that response into the page you
see.</p>
<p>An HTML document is written in a code editor, saved with the
<code>.html</code> extension, then interpreted and rendered by the
browser.</p>
<h2>What is a web browser?</h2>
<p>A browser is a program that understands HTML tags and renders them in
a human-readable form. Developers write HTML because it is a simple way
of telling the browser what to display.</p>
<h2>What is a web server?</h2>
<p>A web server stores pages and serves them to clients over HTTP. When
you type a URL or click a link, the browser sends a request and the
server responds with the matching document or file.</p>
<h2>What is an HTML document?</h2>
<p>A text document saved with <code>.html</code> or <code>.htm</code>,
containing content wrapped in standardized tags enclosed in angle
brackets. The tags are the instructions that configure the page.</p>
"#,
        },
    ),
    (
        "html-installation",
        ContentRecord {
            title: "HTML Installation & Setup",
            reading_time: "4 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>Time to get our hands dirty and prepare to write some code. This
lesson sets up an editor and the couple of tools that make HTML work
faster.</p>
<h2>Prerequisites</h2>
<p>There are none. HTML is the language of the web and is usually the
first step a web developer takes.</p>
<h2>Tools needed to make an HTML page</h2>
<ul>
  <li><strong>An editor:</strong> any text editor works; popular choices
      range from Notepad++ and TextEdit through Sublime Text and Visual
      Studio Code to full IDEs like WebStorm. Online playgrounds such as
      CodePen and JSFiddle are handy for quick experiments. This tutorial
      uses VS Code because it is lightweight and open source.</li>
  <li><strong>A web browser:</strong> you will need one to test your
      pages. Chrome, Firefox, Safari and Brave are all fine.</li>
</ul>
<p>Note: you can write HTML even in plain Notepad. Editors just make the
job easier.</p>
"#,
        },
    ),
    (
        "html-execution",
        ContentRecord {
            title: "HTML Execution - Your First Webpage",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<h2>Your journey to creating your first website begins here</h2>
<p>Let's make it a milestone: your first website. And what better way to
start than the traditional "Hello, World!"?</p>
<h2>Why "Hello, World!"?</h2>
<p>Because it is the simple, familiar example every programmer starts
with. It exercises the basic syntax and structure of a language without
distraction.</p>
<h2>Create the page</h2>
<ol>
  <li>Open your editor and create a new file.</li>
  <li>Save it as <code>index.html</code>.</li>
  <li>Type a minimal document that prints <code>Hello, World!</code>
      inside the <code>&lt;body&gt;</code>.</li>
  <li>Save the file.</li>
  <li>Open it in your browser, either directly or through a live-reload
      extension such as Live Server.</li>
</ol>
"#,
        },
    ),
    (
        "html-structure",
        ContentRecord {
            title: "HTML Page Structure",
            reading_time: "8 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>An HTML document is structured as a set of nested tags. Each tag is
enclosed in angle brackets and acts as a container for content or other
tags.</p>
<h2>DOCTYPE declaration</h2>
<p><code>&lt;!DOCTYPE html&gt;</code> tells the browser which HTML
version the document uses. The latest is HTML5, but should that change
someday, the declaration is what keeps old pages rendering.</p>
<h2>Root element</h2>
<p>The <code>&lt;html&gt;</code> tag is the root of the document. It
contains every other element; <code>&lt;/html&gt;</code> marks the end of
the document.</p>
<h2>Head element</h2>
<p><code>&lt;head&gt;</code> holds information about the document that is
not content: metadata, the title, stylesheets, scripts.</p>
<h2>Title element</h2>
<p><code>&lt;title&gt;</code> sets the text shown in the browser tab and
used by search engines as the page's name.</p>
<h2>Body element</h2>
<p><code>&lt;body&gt;</code> holds the visible content of the page: the
text, images, links and everything else the visitor sees.</p>
"#,
        },
    ),
    (
        "html-tags",
        ContentRecord {
            title: "HTML Tags",
            reading_time: "10 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>A tag is a keyword wrapped in angle brackets that tells the browser
how to format and display content.</p>
<h2>Document structure tags</h2>
<ul>
  <li><code>&lt;!DOCTYPE&gt;</code> - declares the document type</li>
  <li><code>&lt;html&gt;</code> - the root element</li>
  <li><code>&lt;head&gt;</code> - metadata and the title</li>
  <li><code>&lt;body&gt;</code> - the page content</li>
</ul>
<h2>Metadata tags</h2>
<ul>
  <li><code>&lt;meta&gt;</code> - page description, keywords, author</li>
  <li><code>&lt;link&gt;</code> - connects stylesheets and resources</li>
  <li><code>&lt;title&gt;</code> - the browser-tab title</li>
</ul>
<h2>Text formatting tags</h2>
<ul>
  <li><code>&lt;p&gt;</code> - a paragraph</li>
  <li><code>&lt;h1&gt;</code> to <code>&lt;h6&gt;</code> - headings,
      largest to smallest</li>
  <li><code>&lt;strong&gt;</code> - bold text</li>
  <li><code>&lt;em&gt;</code> - italic text</li>
  <li><code>&lt;br&gt;</code> - a line break</li>
  <li><code>&lt;hr&gt;</code> - a horizontal rule</li>
</ul>
<h2>List tags</h2>
<ul>
  <li><code>&lt;ul&gt;</code> - an unordered list</li>
  <li><code>&lt;ol&gt;</code> - an ordered list</li>
  <li><code>&lt;li&gt;</code> - one list item</li>
</ul>
<h2>Hyperlink and media tags</h2>
<ul>
  <li><code>&lt;a&gt;</code> - a hyperlink</li>
  <li><code>&lt;img&gt;</code> - an image</li>
  <li><code>&lt;video&gt;</code> / <code>&lt;audio&gt;</code> - embedded
      media</li>
</ul>
<h2>Form tags</h2>
<ul>
  <li><code>&lt;form&gt;</code>, <code>&lt;input&gt;</code>,
      <code>&lt;textarea&gt;</code>, <code>&lt;button&gt;</code>,
      <code>&lt;select&gt;</code>, <code>&lt;option&gt;</code></li>
</ul>
<h2>Table tags</h2>
<ul>
  <li><code>&lt;table&gt;</code>, <code>&lt;tr&gt;</code>,
      <code>&lt;td&gt;</code>, <code>&lt;th&gt;</code>,
      <code>&lt;thead&gt;</code>, <code>&lt;tbody&gt;</code>,
      <code>&lt;tfoot&gt;</code></li>
</ul>
<h2>Semantic tags</h2>
<ul>
  <li><code>&lt;header&gt;</code>, <code>&lt;nav&gt;</code>,
      <code>&lt;article&gt;</code>, <code>&lt;section&gt;</code>,
      <code>&lt;aside&gt;</code>, <code>&lt;footer&gt;</code>,
      <code>&lt;main&gt;</code></li>
</ul>
"#,
        },
    ),
    (
        "html-elements",
        ContentRecord {
            title: "HTML Elements",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>An HTML element is the combination of a tag and its content: a start
tag, the content, and an end tag.</p>
<h2>What is an HTML element?</h2>
<p><code>Element = start tag + content + end tag</code>. In
<code>&lt;p&gt;Hello, World!&lt;/p&gt;</code> the paragraph element
carries the text "Hello, World!".</p>
<h2>Nested elements</h2>
<p>A nested element is placed inside another. The enclosing element is
the "parent", the enclosed one the "child". In
<code>&lt;p&gt;&lt;strong&gt;Hello&lt;/strong&gt;&lt;/p&gt;</code> the
<code>&lt;strong&gt;</code> tag is nested inside the paragraph and makes
the text bold.</p>
<h2>Empty elements</h2>
<p>An empty (or void) element has no closing tag and no content.
<code>&lt;br&gt;</code> is one: it inserts a line break and needs nothing
else.</p>
"#,
        },
    ),
    (
        "html-attributes",
        ContentRecord {
            title: "HTML Attributes",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>Attributes describe the properties of an element. They live inside the
opening tag and come in two parts: a <strong>name</strong> and a
<strong>value</strong>, the value usually quoted.</p>
<h2>Types of attributes</h2>
<ul>
  <li><strong>Core attributes:</strong> apply to most elements -
      <code>class</code>, <code>id</code>, <code>style</code>,
      <code>title</code>.</li>
  <li><strong>Internationalization attributes:</strong> adapt the
      document to languages and regions - <code>lang</code>,
      <code>dir</code>.</li>
  <li><strong>Generic attributes:</strong> extra information that does
      not change appearance - the <code>data-*</code> family for custom
      data.</li>
</ul>
<h2>Id attribute</h2>
<p>Assigns a unique identifier to one element, the way each person has a
unique identity: <code>&lt;div id="html"&gt;This is an HTML
tutorial.&lt;/div&gt;</code>. Two elements must not share an id.</p>
<h2>Class attribute</h2>
<p>Associates an element with a class for styling or scripting. Unlike
ids, many elements may share one class:
<code>&lt;div class="lesson"&gt;...&lt;/div&gt;</code>.</p>
<h2>Title attribute</h2>
<p>Supplies extra information shown as a tooltip on hover:
<code>&lt;a href="https://www.example.com" title="Visit
Example"&gt;Example Link&lt;/a&gt;</code>.</p>
<h2>Style attribute</h2>
<p>Sets inline CSS for a single element:
<code>&lt;div style="color: blue;"&gt;A styled div.&lt;/div&gt;</code>.</p>
"#,
        },
    ),
    (
        "html-comments",
        ContentRecord {
            title: "HTML comments",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>Comments are little notes you leave in the code for yourself or
others. They make the code easier to understand and never show up on the
page; the browser simply skips them.</p>
<h2>Key points</h2>
<ul>
  <li>Browsers ignore comments.</li>
  <li>They help readability and documentation.</li>
  <li>A comment starts with <code>&lt;!--</code> and ends with
      <code>--&gt;</code>.</li>
  <li>The editor shortcut is <code>Ctrl + /</code> (Windows) or
      <code>Cmd + /</code> (Mac).</li>
  <li>Both single-line and multi-line comments are supported.</li>
</ul>
<h2>Types of comments</h2>
<ul>
  <li>Single-line: one line, for brief explanations.</li>
  <li>Multi-line: the same delimiters stretched over several lines, for
      longer notes or for temporarily disabling a block of markup.</li>
</ul>
"#,
        },
    ),
    (
        "html-id-classes",
        ContentRecord {
            title: "HTML Id & Classes",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>Ids and classes identify elements so CSS and JavaScript can find and
style them.</p>
<h2>HTML id</h2>
<p>An id is a unique identifier for one element, set through the
<code>id</code> attribute. It should appear once per page, which makes it
the right hook for one-of-a-kind parts such as a page header.</p>
<h2>HTML classes</h2>
<p>A class groups elements, set through the <code>class</code> attribute.
Any number of elements can share a class, and one element can carry
several classes separated by spaces. Classes are the workhorse of
styling: define the look once, apply it everywhere.</p>
<h2>Choosing between them</h2>
<ul>
  <li>Use an id when exactly one element needs the hook.</li>
  <li>Use a class when a style or behavior is shared.</li>
</ul>
"#,
        },
    ),
    (
        "skeletal-tags",
        ContentRecord {
            title: "HTML skeletal-tags",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>The skeletal tags are the basic frame every HTML document is built
on.</p>
<pre><code>&lt;!DOCTYPE html&gt;
&lt;html&gt;
&lt;head&gt;
  &lt;title&gt;My Web Page&lt;/title&gt;
&lt;/head&gt;
&lt;body&gt;
&lt;/body&gt;
&lt;/html&gt;</code></pre>
<p><code>&lt;html&gt;</code> is the root that holds everything.
<code>&lt;head&gt;</code> carries metadata and the title shown in the
browser tab. <code>&lt;body&gt;</code> carries the visible content: the
text, images and other elements of the page.</p>
"#,
        },
    ),
    (
        "heading-tags",
        ContentRecord {
            title: "HTML Heading Tags",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>Headings title a page and its sections. HTML provides six levels,
<code>&lt;h1&gt;</code> through <code>&lt;h6&gt;</code>, from largest to
smallest.</p>
<h2>Usage</h2>
<ul>
  <li><code>&lt;h1&gt;</code> is the main heading; use it once per
      page.</li>
  <li><code>&lt;h2&gt;</code> to <code>&lt;h6&gt;</code> mark
      progressively deeper subsections.</li>
  <li>Search engines read headings to understand the structure of a
      page, so keep the hierarchy meaningful rather than skipping levels
      for looks.</li>
</ul>
<pre><code>&lt;h1&gt;Main title&lt;/h1&gt;
&lt;h2&gt;Section&lt;/h2&gt;
&lt;h3&gt;Subsection&lt;/h3&gt;</code></pre>
"#,
        },
    ),
    (
        "paragraph-tag",
        ContentRecord {
            title: "HTML Paragraph Tag",
            reading_time: "6 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>The <code>&lt;p&gt;</code> tag defines a paragraph. Browsers insert a
blank line before and after each one, giving text its natural rhythm.</p>
<pre><code>&lt;p&gt;This is a paragraph.&lt;/p&gt;
&lt;p&gt;This is another paragraph.&lt;/p&gt;</code></pre>
<h2>Notes</h2>
<ul>
  <li>Whitespace inside a paragraph collapses: any run of spaces or
      newlines renders as a single space.</li>
  <li>Paragraphs cannot be nested; opening a new <code>&lt;p&gt;</code>
      implicitly closes the previous one.</li>
  <li>For a break <em>within</em> a paragraph use
      <code>&lt;br&gt;</code> instead of starting a new one.</li>
</ul>
"#,
        },
    ),
    (
        "horizontal-line",
        ContentRecord {
            title: "horizontal-line",
            reading_time: "2 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>The <code>&lt;hr&gt;</code> tag draws a horizontal rule, a thematic
break between blocks of content.</p>
<h2>What is a horizontal rule?</h2>
<p>An element that renders a horizontal line, usually as a divider
between sections.</p>
<pre><code>This is a paragraph above the horizontal line.
&lt;hr&gt;
This is a paragraph below the horizontal line.</code></pre>
<p>In the example, the rule separates the two paragraphs. It is an empty
element: no closing tag, no content.</p>
"#,
        },
    ),
    (
        "line-break",
        ContentRecord {
            title: "line-break",
            reading_time: "2 min read",
            difficulty: Difficulty::Beginner,
            body: r#"
<p>The <code>&lt;br&gt;</code> tag starts a new line. It is used inside a
paragraph where a break is needed without beginning a new paragraph.</p>
<h2>Syntax</h2>
<pre><code>&lt;br&gt;</code></pre>
<h2>Usage</h2>
<ul>
  <li>Starts a new line of text.</li>
  <li>Useful as a visual separator within a block, for addresses or
      verse.</li>
</ul>
<pre><code>This is a line of text.&lt;br&gt;This is another line of
text.</code></pre>
"#,
        },
    ),
];
